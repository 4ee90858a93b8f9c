//! Pure queries over an already-fetched employee snapshot.
//!
//! Nothing here performs I/O or decides whether an empty result is an error;
//! the orchestration service owns those rules.

use std::cmp::Reverse;

use super::employee::Employee;

/// Default size of the top earners list.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Employees whose name contains `fragment` (case-sensitive), in input order.
///
/// # Examples
/// ```
/// use employee_api::domain::{search_by_name, Employee, EmployeeId};
///
/// let ada = Employee::new(EmployeeId::new("1").expect("id"), "Ada Lovelace", 10, 36, "Analyst");
/// assert_eq!(search_by_name(vec![ada.clone()], "Ada"), vec![ada]);
/// ```
#[must_use]
pub fn search_by_name(employees: Vec<Employee>, fragment: &str) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee| employee.name().contains(fragment))
        .collect()
}

/// Highest salary in the snapshot, or zero when it is empty.
#[must_use]
pub fn max_salary(employees: &[Employee]) -> u64 {
    employees.iter().map(Employee::salary).max().unwrap_or(0)
}

/// The `limit` best-paid employees, highest salary first.
///
/// Equal salaries keep their input order.
#[must_use]
pub fn top_by_salary(mut employees: Vec<Employee>, limit: usize) -> Vec<Employee> {
    employees.sort_by_key(|employee| Reverse(employee.salary()));
    employees.truncate(limit);
    employees
}
