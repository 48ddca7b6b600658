//! Expression trees that announce each node as they are interpreted.
//!
//! A [`Nonterminal`] writes its line and then interprets the expression it
//! wraps; a [`Terminal`] writes its line and stops. Interpreting a tree
//! therefore emits one line per node, outermost first.
//!
//! ```rust
//! use switchyard::interpret::{Expression, Nonterminal, Terminal};
//!
//! let ast = Nonterminal::new(Nonterminal::new(Terminal));
//! let mut out = Vec::new();
//! ast.interpret(&mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Non-terminal expression being interpreted ...\n\
//!      Non-terminal expression being interpreted ...\n\
//!      Terminal expression being interpreted ...\n"
//! );
//! ```

use std::fmt::Debug;
use std::io::{self, Write};
use tracing::trace;

pub const NONTERMINAL_LINE: &str = "Non-terminal expression being interpreted ...";
pub const TERMINAL_LINE: &str = "Terminal expression being interpreted ...";

/// A node of an expression tree.
pub trait Expression: Debug {
    /// Write this node's line, then interpret any children.
    fn interpret(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Number of nodes in the tree rooted here.
    fn size(&self) -> usize {
        1
    }
}

/// A leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Terminal;

impl Expression for Terminal {
    fn interpret(&self, out: &mut dyn Write) -> io::Result<()> {
        trace!("interpreting terminal expression");
        writeln!(out, "{TERMINAL_LINE}")
    }
}

/// A node wrapping exactly one child expression.
#[derive(Debug)]
pub struct Nonterminal {
    inner: Box<dyn Expression>,
}

impl Nonterminal {
    pub fn new(inner: impl Expression + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }

    pub fn inner(&self) -> &dyn Expression {
        self.inner.as_ref()
    }
}

impl Expression for Nonterminal {
    fn interpret(&self, out: &mut dyn Write) -> io::Result<()> {
        trace!("interpreting non-terminal expression");
        writeln!(out, "{NONTERMINAL_LINE}")?;
        self.inner.interpret(out)
    }

    fn size(&self) -> usize {
        1 + self.inner.size()
    }
}

/// Build `depth` non-terminals nested around a single terminal.
pub fn nested(depth: usize) -> Box<dyn Expression> {
    let mut expr: Box<dyn Expression> = Box::new(Terminal);
    for _ in 0..depth {
        expr = Box::new(Nonterminal { inner: expr });
    }
    expr
}

/// Interpret `expr` to stdout.
pub fn interpret_to_stdout(expr: &dyn Expression) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    expr.interpret(&mut lock)?;
    lock.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(expr: &dyn Expression) -> Vec<String> {
        let mut out = Vec::new();
        expr.interpret(&mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn terminal_emits_one_line() {
        assert_eq!(lines(&Terminal), [TERMINAL_LINE]);
        assert_eq!(Terminal.size(), 1);
    }

    #[test]
    fn nonterminals_emit_outermost_first() {
        let ast = Nonterminal::new(Nonterminal::new(Terminal));

        assert_eq!(lines(&ast), [NONTERMINAL_LINE, NONTERMINAL_LINE, TERMINAL_LINE]);
        assert_eq!(ast.size(), 3);
    }

    #[test]
    fn nested_builds_requested_depth() {
        let expr = nested(4);

        let emitted = lines(expr.as_ref());
        assert_eq!(emitted.len(), 5);
        assert!(emitted[..4].iter().all(|line| line == NONTERMINAL_LINE));
        assert_eq!(emitted[4], TERMINAL_LINE);
        assert_eq!(nested(0).size(), 1);
    }

    #[derive(Debug)]
    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_propagate() {
        let ast = Nonterminal::new(Terminal);
        let result = ast.interpret(&mut Closed);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
