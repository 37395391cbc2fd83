//! Fixed formatting of the aggregate document.
//!
//! The rule lengths and the `ARQUIVO:` label are contract details: tools
//! splitting the document back apart key on these exact bytes.

/// Banner title used when no configuration overrides it.
pub const DEFAULT_TITLE: &str = "ESTRUTURA DO PROJETO TRIBAL WARS BOT";

const BANNER_RULE_LEN: usize = 40;
const ENTRY_RULE_LEN: usize = 20;

/// Title banner written once at the top of the document.
pub fn banner(title: &str) -> String {
    format!("{title}\n{}\n\n", "=".repeat(BANNER_RULE_LEN))
}

/// Delimiter block naming one file's path, written before its contents.
pub fn entry_header(path: &str) -> String {
    let rule = "=".repeat(ENTRY_RULE_LEN);
    format!("\n{rule}\nARQUIVO: {path}\n{rule}\n")
}

/// Placeholder written in place of contents when a file cannot be read.
pub fn read_error_placeholder(detail: &str) -> String {
    format!("[Erro ao ler este arquivo: {detail}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_title_rule_blank() {
        assert_eq!(
            banner("ESTRUTURA DO PROJETO TRIBAL WARS BOT"),
            "ESTRUTURA DO PROJETO TRIBAL WARS BOT\n\
             ========================================\n\n"
        );
    }

    #[test]
    fn entry_header_wraps_path_in_20_char_rules() {
        assert_eq!(
            entry_header("./src/app.js"),
            "\n====================\nARQUIVO: ./src/app.js\n====================\n"
        );
    }

    #[test]
    fn read_error_placeholder_embeds_detail() {
        assert_eq!(
            read_error_placeholder("permission denied"),
            "[Erro ao ler este arquivo: permission denied]"
        );
    }
}
