//! Session token signing and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::SessionClaims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Mints and checks signed session tokens
///
/// The signature is defense-in-depth only: the session store lookup is the
/// authoritative gate, and a token with a valid signature but no store
/// entry is still rejected by the session manager.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from an explicit configuration
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed session token embedding the email claim
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded token
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, email: &str) -> Result<String, DomainError> {
        let claims = SessionClaims::new(email, self.config.ttl_seconds, &self.config.issuer);
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::IssueFailed))
    }

    /// Verifies a token signature and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - The decoded claims if the signature and
    ///   expiry check out
    /// * `Err(DomainError)` - Token is malformed, forged, or expired
    pub fn verify(&self, token: &str) -> Result<SessionClaims, DomainError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::Expired)
                } else {
                    DomainError::Token(TokenError::InvalidToken)
                }
            })?;

        Ok(token_data.claims)
    }
}
