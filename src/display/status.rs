//! Status display formatting

use crate::models::Status;

/// Format the status picker
pub fn format_status_list(statuses: &[Status]) -> String {
    if statuses.is_empty() {
        return "Nenhuma situação cadastrada. Execute 'contas init'.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:>4}  {}\n", "ID", "Situação"));
    for status in statuses {
        output.push_str(&format!("{:>4}  {}\n", status.id, status.name));
    }
    output
}
