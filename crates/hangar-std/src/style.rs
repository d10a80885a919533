use console::style;

pub enum Style {
    Link,    // URLs
    Command, // Commands, inline code, env variable keys, and profile names
    Failure,
    Path, // File paths
    ProjectConfig,
    HintPrefix,    // "HINT:" text
    InfoPrefix,    // "==>" text
    WarningPrefix, // "warning:" text
    ErrorPrefix,   // "error:" and "error[code]:" text
    Heading,
    Success,
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Link => style(message_ref).cyan().underlined(),
            Style::Command => style(message_ref).yellow(),
            Style::ProjectConfig => style(message_ref).cyan(),
            Style::Failure => style(message_ref).red(),
            Style::HintPrefix => style(message_ref).cyan().bold(),
            Style::InfoPrefix => style(message_ref).blue().bold(),
            Style::WarningPrefix => style(message_ref).yellow(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
            Style::Path | Style::Heading => style(message_ref).bold(),
            Style::Success => style(message_ref).green(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("HANGAR_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    is_truthy(std::env::var(key).ok().as_deref())
}

fn is_truthy(value: Option<&str>) -> bool {
    !matches!(
        value,
        None | Some("") | Some("0") | Some("false") | Some("False") | Some("FALSE")
    )
}
