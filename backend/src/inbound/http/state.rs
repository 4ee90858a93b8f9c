//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend
//! only on the driving ports and stay testable without an upstream.

use std::sync::Arc;

use crate::domain::ports::{EmployeeCommand, EmployeeQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeQuery>,
    pub employee_commands: Arc<dyn EmployeeCommand>,
}

impl HttpState {
    /// Construct state from the two driving ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use employee_api::domain::EmployeeService;
    /// use employee_api::inbound::http::state::HttpState;
    /// use employee_api::outbound::upstream::HttpEmployeeUpstream;
    /// use url::Url;
    ///
    /// let base = Url::parse("http://localhost:8112/api/v1/employee").expect("url");
    /// let upstream = HttpEmployeeUpstream::new(base, Duration::from_secs(10)).expect("client");
    /// let service = Arc::new(EmployeeService::new(Arc::new(upstream)));
    /// let state = HttpState::new(service.clone(), service);
    /// let _queries = state.employees.clone();
    /// ```
    pub fn new(
        employees: Arc<dyn EmployeeQuery>,
        employee_commands: Arc<dyn EmployeeCommand>,
    ) -> Self {
        Self {
            employees,
            employee_commands,
        }
    }
}
