//! # REST API Interface Layer
//!
//! | method   | path             | handler                             |
//! |----------|------------------|-------------------------------------|
//! | `POST`   | `/calculate`     | [`calculate_apis::calculate`]       |
//! | `POST`   | `/scenarios`     | [`scenario_apis::save_scenario`]    |
//! | `GET`    | `/scenarios`     | [`scenario_apis::list_scenarios`]   |
//! | `GET`    | `/scenario/:id`  | [`scenario_apis::get_scenario`]     |
//! | `DELETE` | `/scenario/:id`  | [`scenario_apis::delete_scenario`]  |
//! | `POST`   | `/logs`          | [`logging_apis::log_message`]       |

pub mod calculate_apis;
pub mod logging_apis;
pub mod scenario_apis;

pub use calculate_apis::*;
pub use logging_apis::*;
pub use scenario_apis::*;
