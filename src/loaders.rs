use crate::client::{ApiClient, FetchError};
use crate::models::{CheckRun, CheckSummary};

#[derive(Debug, Clone)]
pub struct DashboardPage {
    pub checks: Result<Vec<CheckSummary>, FetchError>,
}

impl DashboardPage {
    /// Passing and failing check counts, or `None` when the list could not be loaded.
    pub fn counts(&self) -> Option<(usize, usize)> {
        let checks = self.checks.as_ref().ok()?;
        let passing = checks.iter().filter(|check| check.is_successful()).count();
        Some((passing, checks.len() - passing))
    }
}

#[derive(Debug, Clone)]
pub struct CheckPage {
    pub name: String,
    pub check: Result<Vec<CheckRun>, FetchError>,
    pub failures: Result<Vec<CheckRun>, FetchError>,
}

pub async fn load_dashboard(client: &ApiClient) -> DashboardPage {
    DashboardPage {
        checks: client.fetch_dashboard_data().await,
    }
}

pub async fn load_check(client: &ApiClient, name: &str) -> CheckPage {
    let (check, failures) = tokio::join!(
        client.fetch_named_check_data(name),
        client.fetch_named_check_failures(name),
    );
    CheckPage {
        name: name.to_string(),
        check,
        failures,
    }
}
