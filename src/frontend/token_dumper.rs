use crate::frontend::token::Token;

pub struct TokenDumper {
    pub color: bool,
}

impl Default for TokenDumper {
    fn default() -> Self {
        Self { color: true }
    }
}

impl TokenDumper {
    // ANSI colors
    const RESET: &'static str = "\x1b[0m";
    const DIM: &'static str = "\x1b[2m";
    const YEL: &'static str = "\x1b[33m";
    const CYN: &'static str = "\x1b[36m";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn no_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn dump(&self, tokens: &[Token], source: &str) {
        for (i, token) in tokens.iter().enumerate() {
            self.print_one(i, token, source);
        }
    }

    fn print_one(&self, i: usize, token: &Token, source: &str) {
        let text = token.text(source);
        let kind = Self::kind(token, text);
        let colr = if self.color {
            self.color_for(token, text)
        } else {
            ""
        };
        let reset = if self.color { Self::RESET } else { "" };

        if token.eof {
            println!(
                "{:4}: [{:04}] {}{:<5}{}",
                i + 1,
                token.span.start,
                colr,
                kind,
                reset
            );
        } else {
            println!(
                "{:4}: [{:04}] {}{:<5} '{}'{}",
                i + 1,
                token.span.start,
                colr,
                kind,
                text,
                reset
            );
        }
    }

    fn kind(token: &Token, text: &str) -> &'static str {
        if token.eof {
            "EOF"
        } else if text.bytes().all(|b| b.is_ascii_digit()) {
            "INT"
        } else {
            "WORD"
        }
    }

    fn color_for(&self, token: &Token, text: &str) -> &'static str {
        match Self::kind(token, text) {
            "EOF" => Self::DIM,
            "INT" => Self::CYN,
            _ => Self::YEL,
        }
    }
}
