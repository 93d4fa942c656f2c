use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::collector::ExprCollector;


/// Interactive source of normalized expressions.
///
/// Prompts with "> " at top level and with an indented ".." continuation
/// while parens are open. ^C drops a partial expression; ^D ends the stream.
pub struct CliStream {
    editor: Editor<()>,
    collector: ExprCollector,

    curr_expr: String,
}

impl CliStream {
    pub fn new() -> CliStream {
        CliStream {
            editor: Editor::<()>::new(),
            collector: ExprCollector::new(),

            curr_expr: String::default(),
        }
    }
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(expr) = self.collector.next() {
                return Some(expr);
            }

            let line = if self.collector.depth() == 0 {
                if !self.curr_expr.is_empty() {
                    self.editor.add_history_entry(self.curr_expr.as_str());
                }
                self.curr_expr = String::default();
                self.editor.readline("> ")
            } else {
                self.editor
                    .readline(&format!("..{}", "  ".repeat(self.collector.depth())))
            };

            match line {
                Ok(line) => {
                    if !self.curr_expr.is_empty() {
                        self.curr_expr += " ";
                    }
                    self.curr_expr += &line;
                    if let Err(err) = self.collector.feed(&line) {
                        println!("{}", err);
                        println!();
                        self.collector.clear();
                        continue;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    self.collector.clear();
                    self.curr_expr = String::default();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    self.collector.clear();
                    return None;
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!();
                    self.collector.clear();
                    continue;
                }
            }
        }
    }
}
