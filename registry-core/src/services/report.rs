//! Report rendering - plain text user listings

use serde::{Deserialize, Serialize};

use crate::domain::{User, UserStatus};

/// Language of the generated report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportLocale {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt-BR")]
    Portuguese,
}

impl ReportLocale {
    /// Parse a locale key such as `en` or `pt-BR` (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Some(ReportLocale::English),
            "pt" | "pt-br" | "portuguese" => Some(ReportLocale::Portuguese),
            _ => None,
        }
    }

    fn labels(&self) -> &'static Labels {
        match self {
            ReportLocale::English => &ENGLISH,
            ReportLocale::Portuguese => &PORTUGUESE,
        }
    }
}

struct Labels {
    header: &'static str,
    empty: &'static str,
    id: &'static str,
    name: &'static str,
    email: &'static str,
    age: &'static str,
    admin: &'static str,
    status: &'static str,
    yes: &'static str,
    no: &'static str,
    active: &'static str,
    inactive: &'static str,
}

const ENGLISH: Labels = Labels {
    header: "--- User Report ---",
    empty: "No users registered.",
    id: "ID",
    name: "Name",
    email: "Email",
    age: "Age",
    admin: "Admin",
    status: "Status",
    yes: "yes",
    no: "no",
    active: "active",
    inactive: "inactive",
};

const PORTUGUESE: Labels = Labels {
    header: "--- Relatório de Usuários ---",
    empty: "Nenhum usuário cadastrado.",
    id: "ID",
    name: "Nome",
    email: "Email",
    age: "Idade",
    admin: "Admin",
    status: "Status",
    yes: "sim",
    no: "não",
    active: "ativo",
    inactive: "inativo",
};

/// Localized word for a status
pub fn status_label(status: UserStatus, locale: ReportLocale) -> &'static str {
    let labels = locale.labels();
    match status {
        UserStatus::Active => labels.active,
        UserStatus::Inactive => labels.inactive,
    }
}

/// Render the report for the given users, in the order given
///
/// The header is always the first line. Each user becomes a block of
/// `Label: value` lines followed by a blank line.
pub fn render<'a, I>(users: I, locale: ReportLocale) -> String
where
    I: IntoIterator<Item = &'a User>,
{
    let labels = locale.labels();
    let mut out = format!("{}\n", labels.header);

    let mut any = false;
    for user in users {
        any = true;
        out.push_str(&render_user(user, locale));
    }

    if !any {
        out.push_str(labels.empty);
        out.push('\n');
    }

    out
}

fn render_user(user: &User, locale: ReportLocale) -> String {
    let labels = locale.labels();
    let admin = if user.is_admin { labels.yes } else { labels.no };
    format!(
        "{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n{}: {}\n\n",
        labels.id,
        user.id,
        labels.name,
        user.name,
        labels.email,
        user.email,
        labels.age,
        user.age,
        labels.admin,
        admin,
        labels.status,
        status_label(user.status, locale),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewUser;

    fn user(id: &str, name: &str, is_admin: bool) -> User {
        let request = NewUser::new(name, "someone@example.com", 42).with_admin(is_admin);
        User::from_new(id, request, 18).unwrap()
    }

    #[test]
    fn test_empty_report() {
        let report = render(Vec::<&User>::new(), ReportLocale::English);
        assert_eq!(report, "--- User Report ---\nNo users registered.\n");
    }

    #[test]
    fn test_report_blocks() {
        let alice = user("id-1", "Alice", true);
        let mut bob = user("id-2", "Bob", false);
        bob.deactivate();

        let report = render([&alice, &bob], ReportLocale::English);
        assert!(report.starts_with("--- User Report ---\n"));
        assert!(report.contains("ID: id-1\nName: Alice\n"));
        assert!(report.contains("Admin: yes\nStatus: active\n"));
        assert!(report.contains("ID: id-2\nName: Bob\n"));
        assert!(report.contains("Admin: no\nStatus: inactive\n"));
        assert!(report.find("Alice").unwrap() < report.find("Bob").unwrap());
        assert!(!report.contains("No users registered."));
    }

    #[test]
    fn test_portuguese_report() {
        let mut joao = user("id-9", "João Silva", false);
        joao.deactivate();

        let report = render([&joao], ReportLocale::Portuguese);
        assert!(report.starts_with("--- Relatório de Usuários ---"));
        assert!(report.contains("Nome: João Silva"));
        assert!(report.contains("Status: inativo"));

        let empty = render(Vec::<&User>::new(), ReportLocale::Portuguese);
        assert!(empty.contains("Nenhum usuário cadastrado."));
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(ReportLocale::parse("pt-BR"), Some(ReportLocale::Portuguese));
        assert_eq!(ReportLocale::parse("EN"), Some(ReportLocale::English));
        assert_eq!(ReportLocale::parse("fr"), None);
    }
}
