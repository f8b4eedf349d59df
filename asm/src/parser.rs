use color_print::cformat;
use hack::{Comp, Dest, Dialect, Jump};

use crate::error::Error;

// ----------------------------------------------------------------------------
// Statement

/// One classified source line. Operands of address instructions stay textual
/// until the symbol table resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Label(String),
    Addr(String),
    Comp { dest: Dest, comp: Comp, jump: Jump },
}

impl Stmt {
    pub fn parse(code: &str, dialect: Dialect) -> Result<Stmt, Error> {
        let code = code.trim();

        // (LOOP)
        if let Some(rest) = code.strip_prefix('(') {
            let (name, _) = rest
                .split_once(')')
                .ok_or_else(|| Error::UnclosedLabel(code.to_string()))?;
            if name.is_empty() {
                return Err(Error::EmptyLabel);
            }
            return Ok(Stmt::Label(name.to_string()));
        }

        // @target
        if let Some(target) = code.strip_prefix('@') {
            if target.is_empty() {
                return Err(Error::UnparsableLine(code.to_string()));
            }
            return Ok(Stmt::Addr(target.to_string()));
        }

        // dest=comp;jump
        if !code.contains('=') && !code.contains(';') {
            return Err(Error::UnparsableLine(code.to_string()));
        }
        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => (Dest::parse(dest), rest),
            None => (Dest::NULL, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump)),
            None => (rest, None),
        };
        let comp = Comp::parse(comp, dialect)
            .ok_or_else(|| Error::UnrecognizedComp(comp.to_string()))?;
        let jump = match jump {
            Some(jump) => {
                Jump::parse(jump).ok_or_else(|| Error::UnrecognizedJump(jump.to_string()))?
            }
            None => Jump::Null,
        };
        Ok(Stmt::Comp { dest, comp, jump })
    }

    /// Labels take no space in the output.
    pub fn is_inst(&self) -> bool {
        !matches!(self, Stmt::Label(_))
    }

    pub fn cformat(&self) -> String {
        match self {
            Stmt::Label(name) => cformat!("<g>({})</>", name),
            Stmt::Addr(target) => cformat!("<r>@</><u>{}</>", target),
            Stmt::Comp { dest, comp, jump } => hack::Inst::Comp {
                dest: *dest,
                comp: *comp,
                jump: *jump,
            }
            .cformat(),
        }
    }
}
