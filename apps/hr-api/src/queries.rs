//! The fixed statements the dispatcher selects from.
//!
//! Everything here is immutable and built into the binary: seven table
//! passthroughs, per-table counts, and the ten assignment join queries
//! keyed by `"40"`..`"49"`. Dispatch is a static lookup, not a branch, so
//! the whole table is exhaustively testable.

pub const SELECT_REGIONS: &str = "SELECT * FROM regions";
pub const SELECT_COUNTRIES: &str = "SELECT * FROM countries";
pub const SELECT_LOCATIONS: &str = "SELECT * FROM locations";
pub const SELECT_DEPARTMENTS: &str = "SELECT * FROM departments";
pub const SELECT_JOBS: &str = "SELECT * FROM jobs";
pub const SELECT_EMPLOYEES: &str = "SELECT * FROM employees";
pub const SELECT_JOB_HISTORY: &str = "SELECT * FROM job_history";

/// Scalar employee count served by `/abc`.
pub const EMPLOYEE_COUNT: &str = "SELECT COUNT(*) AS count FROM employees";

/// The seven tables `/table-counts` iterates, in query order.
pub const HR_TABLES: [&str; 7] = [
    "regions",
    "countries",
    "locations",
    "departments",
    "jobs",
    "employees",
    "job_history",
];

/// Count statement for one of the `HR_TABLES` names.
pub fn count_query(table: &str) -> String {
    format!("SELECT COUNT(*) AS count FROM {table}")
}

/// One assignment query: a closed-set key and its fixed join statement.
pub struct AssignmentQuery {
    pub key: &'static str,
    pub sql: &'static str,
}

/// The assignment query table. None of the statements carries an ORDER BY;
/// row order is whatever the store returns.
pub const ASSIGNMENT_QUERIES: [AssignmentQuery; 10] = [
    AssignmentQuery {
        key: "40",
        sql: "SELECT * FROM employees e \
              JOIN departments d ON e.department_id = d.department_id \
              JOIN locations l ON d.location_id = l.location_id \
              JOIN countries c ON l.country_id = c.country_id",
    },
    AssignmentQuery {
        key: "41",
        sql: "SELECT * FROM job_history jh \
              JOIN employees e ON jh.employee_id = e.employee_id",
    },
    AssignmentQuery {
        key: "42",
        sql: "SELECT * FROM employees e \
              LEFT JOIN job_history jh ON e.employee_id = jh.employee_id",
    },
    AssignmentQuery {
        key: "43",
        sql: "SELECT * FROM employees e \
              LEFT JOIN job_history jh ON e.employee_id = jh.employee_id \
              LEFT JOIN departments d ON e.department_id = d.department_id",
    },
    AssignmentQuery {
        key: "44",
        sql: "SELECT * FROM employees e \
              LEFT JOIN job_history jh ON e.employee_id = jh.employee_id \
              LEFT JOIN departments d ON e.department_id = d.department_id \
              LEFT JOIN locations l ON d.location_id = l.location_id",
    },
    AssignmentQuery {
        key: "45",
        sql: "SELECT * FROM employees e \
              LEFT JOIN job_history jh ON e.employee_id = jh.employee_id \
              LEFT JOIN departments d ON e.department_id = d.department_id \
              LEFT JOIN locations l ON d.location_id = l.location_id \
              LEFT JOIN countries c ON l.country_id = c.country_id",
    },
    AssignmentQuery {
        key: "46",
        sql: "SELECT * FROM job_history jh \
              JOIN employees e ON jh.employee_id = e.employee_id \
              JOIN departments d ON jh.department_id = d.department_id",
    },
    AssignmentQuery {
        key: "47",
        sql: "SELECT * FROM job_history jh \
              JOIN employees e ON jh.employee_id = e.employee_id \
              JOIN jobs j ON jh.job_id = j.job_id",
    },
    AssignmentQuery {
        key: "48",
        sql: "SELECT * FROM job_history jh \
              JOIN employees e ON jh.employee_id = e.employee_id \
              JOIN jobs j ON jh.job_id = j.job_id \
              JOIN departments d ON jh.department_id = d.department_id",
    },
    AssignmentQuery {
        key: "49",
        sql: "SELECT * FROM job_history jh \
              JOIN employees e ON jh.employee_id = e.employee_id \
              JOIN jobs j ON jh.job_id = j.job_id \
              JOIN departments d ON jh.department_id = d.department_id \
              JOIN locations l ON d.location_id = l.location_id",
    },
];

/// Look up the join statement for an assignment key. Returns `None` for
/// anything outside the closed `"40"`..`"49"` set.
pub fn assignment_query(key: &str) -> Option<&'static str> {
    ASSIGNMENT_QUERIES
        .iter()
        .find(|q| q.key == key)
        .map(|q| q.sql)
}
