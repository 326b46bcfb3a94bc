/// Backend access for the calibration assistant.
///
/// The interface talks to exactly two endpoints, `GET /api/dashboard` and
/// `POST /api/chat`. Both go through the [`CertificateApi`] trait so the
/// controller can be driven by the real HTTP client or by a scripted backend.
///
/// # Usage
///
/// ```rust,no_run
/// use calibration_assistant::api::{CertificateApi, HttpCertificateApi};
///
/// # async fn example() -> anyhow::Result<()> {
/// let api = HttpCertificateApi::new("http://localhost:5000")?;
/// let summary = api.dashboard().await?;
/// println!("{} certificates", summary.total_certificates);
/// # Ok(())
/// # }
/// ```
mod client;

pub use client::{ApiError, ApiResult, CertificateApi, HttpCertificateApi};
