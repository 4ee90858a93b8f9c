//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`EmployeeQuery`], [`EmployeeCommand`]) are what inbound
//! adapters call. The driven port ([`EmployeeUpstream`]) is what outbound
//! adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_command;
mod employee_query;
mod employee_upstream;

pub use employee_command::EmployeeCommand;
#[cfg(test)]
pub use employee_command::MockEmployeeCommand;
pub use employee_query::EmployeeQuery;
#[cfg(test)]
pub use employee_query::MockEmployeeQuery;
#[cfg(test)]
pub use employee_upstream::MockEmployeeUpstream;
pub use employee_upstream::{EmployeeUpstream, EmployeeUpstreamError};
