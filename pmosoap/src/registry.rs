//! Registre des opérations SOAP

use crate::builder::{SoapEncodeError, marshal_response};
use serde::Serialize;
use std::fmt;

/// Opération enregistrée, effacée en type
///
/// Reçoit le contenu brut du corps SOAP et retourne le fragment XML sérialisé
/// de sa valeur de réponse.
pub type SoapOperation = Box<dyn Fn(&str) -> Result<String, SoapEncodeError> + Send + Sync>;

/// Registre ordonné des opérations SOAP
///
/// Les opérations sont consultées dans l'ordre d'enregistrement : la première
/// dont le nom apparaît dans le contenu du corps est retenue. Le registre est
/// construit une fois avant le câblage de l'endpoint, puis partagé en lecture
/// seule entre toutes les requêtes.
#[derive(Default)]
pub struct OperationRegistry {
    operations: Vec<(String, SoapOperation)>,
}

impl OperationRegistry {
    /// Crée un registre vide
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
        }
    }

    /// Enregistre une opération
    ///
    /// Le handler reçoit le contenu brut du corps SOAP et retourne une valeur
    /// sérialisable en XML ; c'est à lui d'extraire les arguments dont il a
    /// besoin. Aucune validation n'est faite à l'enregistrement.
    pub fn register<F, T>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
        T: Serialize,
    {
        let operation: SoapOperation = Box::new(move |body| marshal_response(&handler(body)));
        self.operations.push((name.into(), operation));
    }

    /// Résout l'opération à invoquer pour un contenu de corps donné
    ///
    /// Test de présence par sous-chaîne sur le contenu débarrassé de ses
    /// blancs, pas de correspondance stricte sur le nom d'élément XML. Si
    /// plusieurs noms correspondent, la première opération enregistrée gagne.
    pub fn resolve(&self, body_content: &str) -> Option<(&str, &SoapOperation)> {
        let trimmed = body_content.trim();
        self.operations
            .iter()
            .find(|(name, _)| trimmed.contains(name.as_str()))
            .map(|(name, operation)| (name.as_str(), operation))
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Noms des opérations enregistrées, dans l'ordre
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|(name, _)| name.as_str())
    }
}

impl fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("operations", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename = "PingResponse")]
    struct PingResponse {
        #[serde(rename = "Pong")]
        pong: String,
    }

    fn ping(_body: &str) -> PingResponse {
        PingResponse {
            pong: "pong".to_string(),
        }
    }

    #[test]
    fn test_resolve_by_containment() {
        let mut registry = OperationRegistry::new();
        registry.register("GetVersion", ping);

        let resolved = registry.resolve("  <GetVersion />  ");
        assert_eq!(resolved.map(|(name, _)| name), Some("GetVersion"));
    }

    #[test]
    fn test_resolve_unknown_operation() {
        let mut registry = OperationRegistry::new();
        registry.register("GetVersion", ping);

        assert!(registry.resolve("<UnknownOp/>").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_resolve_registration_order_wins() {
        let mut registry = OperationRegistry::new();
        registry.register("GetVersion", ping);
        registry.register("Get", ping);

        // Les deux noms sont présents, le premier enregistré est retenu
        let resolved = registry.resolve("<GetVersion/>");
        assert_eq!(resolved.map(|(name, _)| name), Some("GetVersion"));

        let mut reversed = OperationRegistry::new();
        reversed.register("Get", ping);
        reversed.register("GetVersion", ping);

        let resolved = reversed.resolve("<GetVersion/>");
        assert_eq!(resolved.map(|(name, _)| name), Some("Get"));
    }

    #[test]
    fn test_registered_operation_marshals_response() {
        let mut registry = OperationRegistry::new();
        registry.register("Ping", ping);

        let (_, operation) = registry.resolve("<Ping/>").unwrap();
        let fragment = operation("<Ping/>").unwrap();
        assert_eq!(fragment, "<PingResponse><Pong>pong</Pong></PingResponse>");
    }
}
