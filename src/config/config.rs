use serde::{Deserialize, Serialize};
use crate::crypto_error::{CryptoError, Result};

// ============================================================================
// Protection DoS parsing
//
// La configuration tient en quelques dizaines d'octets. Un document plus
// gros que MAX_CONFIG_BYTES est refusé AVANT d'appeler serde_json.
// ============================================================================

/// Taille maximale d'un document JSON de configuration (4 Ko)
pub const MAX_CONFIG_BYTES: usize = 4_096;

/// Nombre de tirages de r par défaut avant ResourceExhausted.
/// Pour n = p·q avec p, q grands, un tirage échoue avec probabilité ~1/p + 1/q.
pub const DEFAULT_MAX_RANDOMIZER_ATTEMPTS: u32 = 128;

// ============================================================================
// Forme de lambda
//
//   Carmichael : lambda = lcm(p-1, q-1)   (défaut, définition du manuel)
//   Totient    : lambda = (p-1)(q-1)      (cas particulier, multiple du premier)
//
// Les deux déchiffrent correctement tant que gcd(lambda, n) = 1.
// ============================================================================
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LambdaForm {
    #[default]
    Carmichael,
    Totient,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PaillierConfig {
    pub lambda_form:             LambdaForm,
    pub max_randomizer_attempts: u32,
}

impl Default for PaillierConfig {
    fn default() -> Self {
        PaillierConfig {
            lambda_form:             LambdaForm::Carmichael,
            max_randomizer_attempts: DEFAULT_MAX_RANDOMIZER_ATTEMPTS,
        }
    }
}

impl PaillierConfig {
    /// Parse une configuration JSON. Les champs absents prennent leur
    /// valeur par défaut.
    ///
    /// Retourne :
    ///   Err(ConfigParse)   si le document dépasse MAX_CONFIG_BYTES ou est invalide
    ///   Err(InvalidInput)  si max_randomizer_attempts == 0
    pub fn from_json_str(raw: &str) -> Result<Self> {
        if raw.len() > MAX_CONFIG_BYTES {
            return Err(CryptoError::ConfigParse(format!(
                "document de {} octets (maximum autorisé : {} octets)",
                raw.len(),
                MAX_CONFIG_BYTES
            )));
        }
        let cfg: PaillierConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_randomizer_attempts == 0 {
            return Err(CryptoError::InvalidInput(
                "max_randomizer_attempts doit valoir au moins 1".into(),
            ));
        }
        Ok(())
    }
}
