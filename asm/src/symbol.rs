use hack::{inst::ADDR_MAX, reg, Builtin, Dialect};
use indexmap::IndexMap;
use serde::Serialize;

use crate::{assembler::Options, error::Error};

/// Labels and variables of one assembly run. They share one namespace.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    labels: IndexMap<String, u16>,
    variables: IndexMap<String, u16>,
    extended: bool,
    dialect: Dialect,
}

impl SymbolTable {
    pub fn new(options: &Options) -> Self {
        SymbolTable {
            labels: IndexMap::new(),
            variables: IndexMap::new(),
            extended: options.extended_symbols,
            dialect: options.dialect,
        }
    }

    /// Registers `name` at `address`, the count of instructions before it.
    pub fn declare_label(&mut self, name: &str, address: usize) -> Result<(), Error> {
        if self.labels.contains_key(name) || self.variables.contains_key(name) {
            return Err(Error::DuplicateSymbol(name.to_string()));
        }
        if address > ADDR_MAX as usize {
            return Err(Error::ValueOutOfRange(name.to_string()));
        }
        let address = address as u16;
        log::debug!("label `{}` = {}", name, address);
        self.labels.insert(name.to_string(), address);
        Ok(())
    }

    /// Resolves an address operand, allocating a variable for unknown names.
    ///
    /// Order: integer literal, `R0`..`R15`, predefined pointer, variable, label,
    /// new variable.
    pub fn resolve(&mut self, token: &str) -> Result<u16, Error> {
        if let Some(value) = literal(token)? {
            return Ok(value);
        }
        if let Some(reg) = register(token)? {
            return Ok(reg);
        }
        if let Some(builtin) = Builtin::parse(token, self.extended) {
            return Ok(builtin.addr());
        }
        if let Some(addr) = self.variables.get(token) {
            return Ok(*addr);
        }
        if let Some(addr) = self.labels.get(token) {
            return Ok(*addr);
        }

        let addr = reg::VAR_BASE as usize + self.variables.len();
        if addr > ADDR_MAX as usize {
            return Err(Error::ValueOutOfRange(token.to_string()));
        }
        let addr = addr as u16;
        log::debug!("variable `{}` = {}", token, addr);
        self.variables.insert(token.to_string(), addr);
        Ok(addr)
    }

    pub fn labels(&self) -> &IndexMap<String, u16> {
        &self.labels
    }

    pub fn variables(&self) -> &IndexMap<String, u16> {
        &self.variables
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.variables
            .get(name)
            .or_else(|| self.labels.get(name))
            .copied()
    }

    pub fn symbol_map(&self) -> SymbolMap {
        SymbolMap {
            dialect: self.dialect,
            labels: self.labels.clone(),
            variables: self.variables.clone(),
        }
    }
}

/// Serializable snapshot of the table, written by `--symbols`.
#[derive(Debug, Serialize)]
pub struct SymbolMap {
    pub dialect: Dialect,
    pub labels: IndexMap<String, u16>,
    pub variables: IndexMap<String, u16>,
}

/// `Some` when `s` is written as a decimal integer, with an optional sign.
fn integer(s: &str) -> Option<Option<i64>> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse::<i64>().ok())
}

fn literal(token: &str) -> Result<Option<u16>, Error> {
    match integer(token) {
        None => Ok(None),
        Some(Some(v)) if (0..=ADDR_MAX as i64).contains(&v) => Ok(Some(v as u16)),
        Some(_) => Err(Error::ValueOutOfRange(token.to_string())),
    }
}

fn register(token: &str) -> Result<Option<u16>, Error> {
    let Some(index) = token.strip_prefix('R') else {
        return Ok(None);
    };
    match integer(index) {
        None => Ok(None),
        Some(Some(v)) if (0..reg::REG_COUNT as i64).contains(&v) => Ok(Some(v as u16)),
        Some(_) => Err(Error::RegisterOutOfRange(token.to_string())),
    }
}
