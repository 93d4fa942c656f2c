//! Line-fed collection of top-level expressions.

use log::debug;

use std::collections::VecDeque;

use crate::error::MalformedExpression;


/// Accumulates text across lines and outputs each complete top-level
/// expression with whitespace removed.
///
/// Inside parens whitespace is dropped. At depth 0, whitespace or an opening
/// paren ends a bare atom, and so does the end of each fed chunk.
#[derive(Debug, Default)]
pub struct ExprCollector {
    depth: usize,
    curr: String,
    exprs: VecDeque<String>,
}

impl ExprCollector {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Drops any partial expression. Completed expressions are kept.
    pub fn clear(&mut self) {
        self.depth = 0;
        self.curr.clear();
    }

    pub fn feed<S: AsRef<str>>(&mut self, input: S) -> Result<(), MalformedExpression> {
        for c in input.as_ref().chars() {
            if c.is_whitespace() {
                if self.depth == 0 {
                    self.flush();
                }
                continue;
            }

            match c {
                '(' => {
                    if self.depth == 0 {
                        self.flush();
                    }
                    self.depth += 1;
                    self.curr.push(c);
                }
                ')' => {
                    if self.depth == 0 {
                        self.curr.push(c);
                        let stray = std::mem::take(&mut self.curr);
                        return malformed!(stray, UnmatchedClose);
                    }
                    self.depth -= 1;
                    self.curr.push(c);
                    if self.depth == 0 {
                        self.flush();
                    }
                }
                _ => self.curr.push(c),
            }
        }

        if self.depth == 0 {
            self.flush();
        }
        Ok(())
    }

    /// Signals end of input; fails if an expression is still open.
    pub fn finish(&mut self) -> Result<(), MalformedExpression> {
        if self.depth > 0 {
            let partial = std::mem::take(&mut self.curr);
            self.depth = 0;
            return malformed!(partial, UnmatchedOpen);
        }
        Ok(())
    }

    fn flush(&mut self) {
        if !self.curr.is_empty() {
            let expr = std::mem::take(&mut self.curr);
            debug!("Collected expression: {}", expr);
            self.exprs.push_back(expr);
        }
    }
}

impl Iterator for ExprCollector {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.exprs.pop_front()
    }
}


/// Collects every expression in a complete text.
pub fn read_exprs<S: AsRef<str>>(text: S) -> Result<Vec<String>, MalformedExpression> {
    let mut collector = ExprCollector::new();
    for line in text.as_ref().lines() {
        collector.feed(line)?;
    }
    collector.finish()?;
    Ok(collector.collect())
}


#[cfg(test)]
#[path = "./collector_test.rs"]
mod collector_test;
