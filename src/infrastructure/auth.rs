use crate::domain::auth::{AccessClaims, TokenVerifier};
use crate::infrastructure::config::OAuth2Settings;
use anyhow::Result;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use std::fs;

/// Verifies ES256 access tokens signed by the OAuth2 provider.
///
/// Only the provider's public key is held here; tokens are issued elsewhere.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    /// Load the verification key from the configured PEM file
    pub fn from_settings(settings: &OAuth2Settings) -> Result<Self> {
        let public_key_pem = fs::read(&settings.public_key_path)
            .map_err(|e| anyhow::anyhow!("Failed to read OAuth2 public key file: {}", e))?;

        Self::new_from_key(
            &public_key_pem,
            settings.issuer.as_deref(),
            settings.audience.as_deref(),
        )
    }

    /// Create a verifier from PEM key content
    pub fn new_from_key(
        public_key_pem: &[u8],
        issuer: Option<&str>,
        audience: Option<&str>,
    ) -> Result<Self> {
        let decoding_key = DecodingKey::from_ec_pem(public_key_pem)
            .map_err(|e| anyhow::anyhow!("Failed to parse OAuth2 public key: {}", e))?;

        let mut validation = Validation::new(Algorithm::ES256);
        validation.validate_exp = true;
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Ok(Self {
            decoding_key,
            validation,
        })
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<AccessClaims> {
        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }
}
