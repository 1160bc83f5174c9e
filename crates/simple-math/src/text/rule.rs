use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Overall shape of matrix text.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `[[1, 2], [3, 4]]`: the matrix and every row are wrapped in brackets.
    #[default]
    Bracketed,
    /// One row per line, cells split by the column separator.
    Delimited,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Brackets {
    #[default]
    Square,
    Round,
    Curly,
}

impl Brackets {
    pub fn open(self) -> char {
        match self {
            Brackets::Square => '[',
            Brackets::Round => '(',
            Brackets::Curly => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            Brackets::Square => ']',
            Brackets::Round => ')',
            Brackets::Curly => '}',
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    Comma,
    Semicolon,
    Tab,
    Space,
    Pipe,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Semicolon => ';',
            Separator::Tab => '\t',
            Separator::Space => ' ',
            Separator::Pipe => '|',
        }
    }

    pub fn is_whitespace(self) -> bool {
        matches!(self, Separator::Tab | Separator::Space)
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" | "," => Ok(Separator::Comma),
            "semicolon" | ";" => Ok(Separator::Semicolon),
            "tab" | "\t" => Ok(Separator::Tab),
            "space" | " " => Ok(Separator::Space),
            "pipe" | "|" => Ok(Separator::Pipe),
            _ => Err(format!(
                "Unknown separator: {:?}. Expected one of comma, semicolon, tab, space, pipe",
                s
            )),
        }
    }
}

/// How a matrix is written out as text.
///
/// The default produces `[[1, 2], [3, 4]]`. `row_separator` and `brackets`
/// only apply to [`Layout::Bracketed`]; delimited text always puts one row
/// per line. `spacing` adds a space after non-whitespace separators.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct FormatRule {
    pub layout: Layout,
    pub brackets: Brackets,
    pub column_separator: Separator,
    pub row_separator: Separator,
    pub spacing: bool,
}

impl FormatRule {
    /// Tab separated, one row per line.
    pub fn tsv() -> Self {
        Self {
            layout: Layout::Delimited,
            column_separator: Separator::Tab,
            spacing: false,
            ..Self::default()
        }
    }

    pub fn csv() -> Self {
        Self {
            layout: Layout::Delimited,
            column_separator: Separator::Comma,
            spacing: false,
            ..Self::default()
        }
    }
}

impl Default for FormatRule {
    fn default() -> Self {
        Self {
            layout: Layout::Bracketed,
            brackets: Brackets::Square,
            column_separator: Separator::Comma,
            row_separator: Separator::Comma,
            spacing: true,
        }
    }
}

/// How text is read back into a matrix.
///
/// Whitespace around cells and between tokens is always accepted, so one
/// `ParseRule` reads the output of a `FormatRule` with or without spacing.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct ParseRule {
    pub layout: Layout,
    pub brackets: Brackets,
    pub column_separator: Separator,
    pub row_separator: Separator,
}

impl Default for ParseRule {
    fn default() -> Self {
        FormatRule::default().into()
    }
}

impl From<FormatRule> for ParseRule {
    fn from(rule: FormatRule) -> Self {
        Self {
            layout: rule.layout,
            brackets: rule.brackets,
            column_separator: rule.column_separator,
            row_separator: rule.row_separator,
        }
    }
}

impl From<&FormatRule> for ParseRule {
    fn from(rule: &FormatRule) -> Self {
        (*rule).into()
    }
}
