use reqwest::{Client, Url};

use crate::domain::NewReservation;

/// One way of delivering a reservation to the sheet endpoint. Strategies are tried
/// in `STRATEGY_CHAIN` order until one succeeds.
///
/// Both strategies issue the same URL-encoded GET; they differ in what counts as
/// failure. `FormGet` inspects the response status. `FireAndForget` treats the
/// response as opaque and only fails if the request itself cannot be sent, which is
/// all the endpoint guarantees anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportStrategy {
    FormGet,
    FireAndForget,
}

pub struct SheetClient {
    http_client: Client,
    endpoint: Url,
}

impl SheetClient {
    pub const STRATEGY_CHAIN: [TransportStrategy; 2] =
        [TransportStrategy::FormGet, TransportStrategy::FireAndForget];

    pub fn new(endpoint: String, timeout: std::time::Duration) -> Self {
        // take a string, parse as a Url; from this point forward the endpoint is known valid
        let endpoint = Url::parse(&endpoint).expect("Failed to parse sheet endpoint URL");
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http_client,
            endpoint,
        }
    }

    /// Runs the strategy chain until one attempt succeeds, reporting which strategy
    /// delivered. Fails only when every strategy in the chain has failed, with the
    /// last failure as the error.
    pub async fn deliver(
        &self,
        reservation: &NewReservation,
    ) -> Result<TransportStrategy, reqwest::Error> {
        let mut last_error = None;
        for strategy in Self::STRATEGY_CHAIN {
            match self.attempt(strategy, reservation).await {
                Ok(()) => return Ok(strategy),
                Err(error) => {
                    tracing::warn!(
                        "Reservation delivery via {:?} failed, trying next strategy: {:?}",
                        strategy,
                        error
                    );
                    last_error = Some(error);
                }
            }
        }
        Err(last_error.expect("the strategy chain is never empty"))
    }

    /// Performs only the fire-and-forget hop. Used by the manual alternate
    /// submission path, which skips the strict strategy entirely.
    pub async fn deliver_opaque(&self, reservation: &NewReservation) -> Result<(), reqwest::Error> {
        self.attempt(TransportStrategy::FireAndForget, reservation)
            .await
    }

    async fn attempt(
        &self,
        strategy: TransportStrategy,
        reservation: &NewReservation,
    ) -> Result<(), reqwest::Error> {
        let params = ReservationParams {
            first_name: reservation.first_name.as_ref(),
            last_name: reservation.last_name.as_ref(),
            email: reservation.email.as_ref(),
            phone: &reservation.phone,
            message: &reservation.message,
        };
        let response = self
            .http_client
            .get(self.endpoint.clone())
            .query(&params)
            .send()
            .await?;
        match strategy {
            TransportStrategy::FormGet => {
                // `send` does not fail on HTTP error codes; surface them here
                response.error_for_status()?;
            }
            // opaque response: the status cannot be trusted, so it is not inspected
            TransportStrategy::FireAndForget => {}
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ReservationParams<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}
