// ===========================================================================
// Gestion centralisée des erreurs cryptographiques
//
// Tous les modules utilisent ce type au lieu de panic!/assert!/unwrap().
// Une erreur de clé ou d'entrée est une erreur de programmation de
// l'appelant : elle est remontée telle quelle, jamais corrigée localement.
// ===========================================================================

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    // --- Erreurs de paramètres d'entrée ---
    /// Opérande hors domaine (m >= n, c >= n², p == q, r non inversible...)
    InvalidInput(String),

    // --- Erreurs mathématiques ---
    /// L'inverse modulaire n'existe pas (gcd != 1) : matériel de clé dégénéré
    NoInverseExists,
    /// Division par un pgcd nul (lcm(0, 0)) ou module nul
    DivisionByZero,

    // --- Erreurs de ressources ---
    /// Aucun randomiseur inversible trouvé après `attempts` tirages
    ResourceExhausted { attempts: u32 },

    // --- Erreurs de configuration ---
    /// JSON de configuration illisible ou trop volumineux
    ConfigParse(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidInput(msg) =>
                write!(f, "Entrée invalide : {msg}"),
            CryptoError::NoInverseExists =>
                write!(f, "Impossible de calculer l'inverse modulaire (gcd != 1)"),
            CryptoError::DivisionByZero =>
                write!(f, "Division par zéro (pgcd ou module nul)"),
            CryptoError::ResourceExhausted { attempts } =>
                write!(f, "Aucun randomiseur premier avec n après {attempts} tirages"),
            CryptoError::ConfigParse(msg) =>
                write!(f, "Configuration invalide : {msg}"),
        }
    }
}

impl std::error::Error for CryptoError {}

impl From<serde_json::Error> for CryptoError {
    fn from(e: serde_json::Error) -> Self {
        CryptoError::ConfigParse(e.to_string())
    }
}

/// Alias utilisé par toutes les opérations de la crate.
pub type Result<T> = std::result::Result<T, CryptoError>;
