//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::dates::format_br;
use crate::models::{AccountRecord, Amount};
use crate::query::Page;

/// Format one page of accounts as a table
pub fn format_account_page(page: &Page<AccountRecord>) -> String {
    if page.is_empty() {
        return if page.total_items == 0 {
            "Nenhuma conta encontrada.".to_string()
        } else {
            format!(
                "Página {} vazia ({} páginas).",
                page.page,
                page.total_pages()
            )
        };
    }

    let records = &page.items;

    // Calculate column widths
    let id_width = records
        .iter()
        .map(|r| r.account.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let name_width = records
        .iter()
        .map(|r| r.account.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let status_width = records
        .iter()
        .map(|r| r.status.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>id_width$}  {:<name_width$}  {:<10}  {:<status_width$}  {:>14}\n",
        "ID",
        "Nome",
        "Vencimento",
        "Situação",
        "Valor",
        id_width = id_width,
        name_width = name_width,
        status_width = status_width,
    ));

    let separator = format!(
        "{:->id_width$}  {:-<name_width$}  {:-<10}  {:-<status_width$}  {:->14}\n",
        "",
        "",
        "",
        "",
        "",
        id_width = id_width,
        name_width = name_width,
        status_width = status_width,
    );
    output.push_str(&separator);

    for record in records {
        output.push_str(&format!(
            "{:>id_width$}  {:<name_width$}  {:<10}  {:<status_width$}  {:>14}\n",
            record.account.id,
            record.account.name,
            format_br(record.account.due_date),
            record.status.name,
            record.account.amount.to_string(),
            id_width = id_width,
            name_width = name_width,
            status_width = status_width,
        ));
    }

    // Page total
    let total: Amount = records.iter().map(|r| r.account.amount).sum();
    output.push_str(&separator);
    output.push_str(&format!(
        "{:>id_width$}  {:<name_width$}  {:<10}  {:<status_width$}  {:>14}\n",
        "",
        "TOTAL",
        "",
        "",
        total.to_string(),
        id_width = id_width,
        name_width = name_width,
        status_width = status_width,
    ));

    output.push_str(&format!(
        "\nPágina {} de {} ({} contas)",
        page.page,
        page.total_pages(),
        page.total_items
    ));
    output.push('\n');
    if let Some(prev) = page.prev_page() {
        output.push_str(&format!("anterior: {}\n", page_command(page, prev)));
    }
    if let Some(next) = page.next_page() {
        output.push_str(&format!("próxima:  {}\n", page_command(page, next)));
    }

    output
}

/// The listing command for another page under the same filters
fn page_command(page: &Page<AccountRecord>, number: usize) -> String {
    let mut command = format!(
        "contas conta list --page {} --per-page {}",
        number, page.per_page
    );
    let flags = page.params.to_flags();
    if !flags.is_empty() {
        command.push(' ');
        command.push_str(&flags);
    }
    command
}

/// Format a single account's details
pub fn format_account_details(record: &AccountRecord) -> String {
    let account = &record.account;

    let mut output = String::new();
    output.push_str(&format!("Conta: {}\n", account.name));
    output.push_str(&format!("  ID:          {}\n", account.id));
    output.push_str(&format!("  Valor:       {}\n", account.amount));
    output.push_str(&format!("  Vencimento:  {}\n", format_br(account.due_date)));
    output.push_str(&format!(
        "  Situação:    {} ({})\n",
        record.status.name, record.status.id
    ));
    output.push('\n');
    output.push_str(&format!(
        "  Criada em:   {}\n",
        account.created_at.format("%d/%m/%Y %H:%M")
    ));
    output.push_str(&format!(
        "  Editada em:  {}\n",
        account.updated_at.format("%d/%m/%Y %H:%M")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::FilterParams;
    use crate::storage::tests::{create_test_storage, seed};
    use crate::storage::RecordStore;

    #[test]
    fn test_format_empty_page() {
        let page = Page::paginate(Vec::new(), 1, 10, FilterParams::default());
        assert_eq!(format_account_page(&page), "Nenhuma conta encontrada.");
    }

    #[test]
    fn test_format_page_with_total() {
        let (_temp_dir, storage) = create_test_storage();
        let a = seed(&storage, "Rent", "1.500,00", "2024-03-01", 1);
        let b = seed(&storage, "Water", "80,00", "2024-03-10", 2);
        let records = vec![
            storage.get_record(b.id).unwrap().unwrap(),
            storage.get_record(a.id).unwrap().unwrap(),
        ];

        let page = Page::paginate(records, 1, 10, FilterParams::default());
        let output = format_account_page(&page);

        assert!(output.contains("Water"));
        assert!(output.contains("01/03/2024"));
        assert!(output.contains("Pendente"));
        assert!(output.contains("1.580,00"));
        assert!(output.contains("Página 1 de 1 (2 contas)"));
    }

    #[test]
    fn test_page_hints_keep_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let records: Vec<_> = ["Luz janeiro", "Luz fevereiro", "Luz março"]
            .into_iter()
            .map(|name| {
                let account = seed(&storage, name, "120,00", "2024-03-01", 2);
                storage.get_record(account.id).unwrap().unwrap()
            })
            .collect();
        let params = FilterParams {
            nome: Some("luz".into()),
            data_inicio: Some("2024-01-01".into()),
            data_fim: None,
        };

        let page = Page::paginate(records, 2, 1, params);
        let output = format_account_page(&page);

        assert!(output.contains(
            "anterior: contas conta list --page 1 --per-page 1 --nome \"luz\" --data-inicio \"2024-01-01\"\n"
        ));
        assert!(output.contains(
            "próxima:  contas conta list --page 3 --per-page 1 --nome \"luz\" --data-inicio \"2024-01-01\"\n"
        ));
        assert!(!output.contains("--data-fim"));
    }

    #[test]
    fn test_format_details() {
        let (_temp_dir, storage) = create_test_storage();
        let account = seed(&storage, "Rent", "1.500,00", "2024-03-01", 1);
        let record = storage.get_record(account.id).unwrap().unwrap();

        let output = format_account_details(&record);
        assert!(output.starts_with("Conta: Rent\n"));
        assert!(output.contains("Valor:       1.500,00"));
        assert!(output.contains("Situação:    Paga (1)"));
    }
}
