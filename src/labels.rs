#[cfg(not(test))]
use sys_locale::get_locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenLanguage {
    Pt,
    En,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ScreenLabels {
    pub heading: &'static str,
    pub auto_delete: &'static str,
    pub title_placeholder: &'static str,
    pub add: &'static str,
    pub details_placeholder: &'static str,
    pub close_editor: &'static str,
    pub details_prefix: &'static str,
    pub remove: &'static str,
}

pub fn resolve_language(language: &str) -> ScreenLanguage {
    let normalized = language.trim().to_lowercase();
    match normalized.as_str() {
        "pt" => ScreenLanguage::Pt,
        "en" => ScreenLanguage::En,
        _ => detect_system_language(),
    }
}

#[cfg(not(test))]
fn detect_system_language() -> ScreenLanguage {
    language_for_locale(&get_locale().unwrap_or_default())
}

// Tests must not depend on the machine's locale.
#[cfg(test)]
fn detect_system_language() -> ScreenLanguage {
    language_for_locale("")
}

fn language_for_locale(locale: &str) -> ScreenLanguage {
    if locale.to_lowercase().starts_with("en") {
        ScreenLanguage::En
    } else {
        ScreenLanguage::Pt
    }
}

pub fn screen_labels(lang: ScreenLanguage) -> ScreenLabels {
    match lang {
        ScreenLanguage::Pt => ScreenLabels {
            heading: "📝 Minha To-Do List",
            auto_delete: "Apagar tarefas automaticamente ao concluir",
            title_placeholder: "Escreva o titulo da tarefa",
            add: "Adicionar",
            details_placeholder: "Adicione detalhes à tarefa...",
            close_editor: "Fechar",
            details_prefix: "📝",
            remove: "🗑",
        },
        ScreenLanguage::En => ScreenLabels {
            heading: "📝 My To-Do List",
            auto_delete: "Delete tasks automatically when completed",
            title_placeholder: "Type the task title",
            add: "Add",
            details_placeholder: "Add details to the task...",
            close_editor: "Close",
            details_prefix: "📝",
            remove: "🗑",
        },
    }
}
