use crate::wire::HealthRes;

/// Simple health service shared by the Verve front ends.
///
/// The knowledge table is loaded before any server starts listening, so a running process is
/// always able to answer queries.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Verve is alive".into(),
        }
    }
}
