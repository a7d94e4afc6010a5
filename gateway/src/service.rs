//! Gateway core operations: public-key/ciphertext pass-through and the
//! `decrypt` fan-out/combine pipeline. See spec.md §4.3.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pairing_core::shamir::{self, KeyShare};
use service_common::dto::{
    CiphertextResponse, KeyShareEntry, PartialDecryptRequest, PartialDecryptResponse,
    PublicKeyResponse,
};
use service_common::{AppError, ServiceClient};

/// `S = [s_1, ..., s_n]`, fetched once at startup and cached immutably
/// (spec.md §4.3 step 2, §5's "GW cached shares" discipline).
pub struct GatewayState {
    pub km_client: ServiceClient,
    pub ds_client: ServiceClient,
    pub key_shares: Vec<KeyShareEntry>,
}

impl GatewayState {
    /// Steps 1-3 of spec.md §4.3's startup procedure.
    pub async fn init(km_client: ServiceClient, ds_client: ServiceClient) -> Result<Self, AppError> {
        let key_shares: Vec<KeyShareEntry> = km_client.get_json("/key-shares").await?;
        Ok(GatewayState {
            km_client,
            ds_client,
            key_shares,
        })
    }

    /// Proxy: `public_key()`.
    pub async fn public_key(&self) -> Result<PublicKeyResponse, AppError> {
        self.km_client.get_json("/public-key").await
    }

    /// Proxy: `ciphertext()`.
    pub async fn ciphertext(&self) -> Result<CiphertextResponse, AppError> {
        self.ds_client.get_json("/ciphertext").await
    }

    /// Fans out one partial-decrypt RPC per cached share, concurrently, and
    /// Shamir-combines the resulting G1-point byte blobs. Reproduces the
    /// known subtlety of spec.md §4.3/§9: the combine step treats the raw
    /// partial-decryption bytes as Shamir shares of the final secret, not
    /// as inputs to a Lagrange-in-the-exponent combination. This is
    /// intentional — see DESIGN.md.
    pub async fn decrypt(&self, ciphertext: &str) -> Result<String, AppError> {
        let n = self.key_shares.len();
        let (tx, mut rx) = tokio::sync::mpsc::channel::<AppError>(n.max(1));
        let mut handles = Vec::with_capacity(n);

        for (i, share) in self.key_shares.iter().cloned().enumerate() {
            let ds_client = self.ds_client.clone();
            let ciphertext = ciphertext.to_string();
            let tx = tx.clone();
            handles.push(tokio::spawn(async move {
                let request = PartialDecryptRequest {
                    ciphertext,
                    share: share.share,
                };
                match ds_client
                    .post_json::<_, PartialDecryptResponse>("/partial-decrypt", &request)
                    .await
                {
                    Ok(resp) => Some((i, resp.partial_decryption)),
                    Err(err) => {
                        let _ = tx.send(err).await;
                        None
                    }
                }
            }));
        }
        drop(tx);

        let mut buffer: Vec<Option<String>> = vec![None; n];
        for handle in handles {
            if let Ok(Some((i, partial))) = handle.await {
                buffer[i] = Some(partial);
            }
        }

        // "wait for all dispatches to complete" then "return the first
        // observed error" (spec.md §4.3 steps 4-5).
        if let Some(err) = rx.recv().await {
            return Err(err);
        }

        let mut shares = Vec::with_capacity(n);
        for (i, partial) in buffer.into_iter().enumerate() {
            let partial = partial.ok_or_else(|| {
                AppError::Internal(format!("missing partial decryption at position {i}"))
            })?;
            let bytes = STANDARD
                .decode(&partial)
                .map_err(|e| AppError::validation("partial_decryption", format!("invalid base64: {e}")))?;
            shares.push(KeyShare {
                id: i as u8,
                share_bytes: bytes,
            });
        }

        let secret_bytes = shamir::combine(&shares)
            .map_err(|e| AppError::Internal(format!("combine failed: {e}")))?;

        String::from_utf8(secret_bytes)
            .map_err(|e| AppError::Internal(format!("decrypted secret is not valid utf-8: {e}")))
    }
}
