use hack::{Dialect, Inst};

use crate::{error::LineError, parser::Stmt, symbol::SymbolTable};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub dialect: Dialect,
    /// Predefine `THAT`, `SCREEN` and `KBD`.
    pub extended_symbols: bool,
}

/// A source line after assembly.
#[derive(Debug, Clone)]
pub struct Listed {
    /// 1-based line number in the source
    pub no: usize,
    pub code: String,
    pub stmt: Option<Stmt>,
    /// Address of the instruction; `None` for labels and lines that failed to parse
    pub pc: Option<u16>,
    pub inst: Option<Inst>,
}

/// The result of one run: every line, the symbols it defined and the errors it
/// raised. Lines that failed keep `inst == None`, so the output is partial when
/// `errors` is not empty.
#[derive(Debug)]
pub struct Assembly {
    pub lines: Vec<Listed>,
    pub symbols: SymbolTable,
    pub errors: Vec<LineError>,
    pub dialect: Dialect,
}

impl Assembly {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn insts(&self) -> impl Iterator<Item = &Inst> {
        self.lines.iter().filter_map(|line| line.inst.as_ref())
    }

    pub fn words(&self) -> Vec<u16> {
        self.insts().map(|inst| inst.to_bin(self.dialect)).collect()
    }

    /// One 16-character `0`/`1` string per instruction.
    pub fn binary(&self) -> Vec<String> {
        self.insts().map(|inst| inst.to_text(self.dialect)).collect()
    }
}

pub struct Assembler {
    options: Options,
}

impl Assembler {
    pub fn new(options: Options) -> Self {
        Assembler { options }
    }

    /// Assembles `(line number, code)` pairs. Every call starts from an empty
    /// symbol table.
    pub fn run<'a, I>(&self, lines: I) -> Assembly
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut symbols = SymbolTable::new(&self.options);
        let mut errors = vec![];

        // Classify
        let mut lines: Vec<Listed> = lines
            .into_iter()
            .map(|(no, code)| {
                let stmt = match Stmt::parse(code, self.options.dialect) {
                    Ok(stmt) => Some(stmt),
                    Err(error) => {
                        errors.push(LineError::new(no, error));
                        None
                    }
                };
                Listed {
                    no,
                    code: code.to_string(),
                    stmt,
                    pc: None,
                    inst: None,
                }
            })
            .collect();

        // Pass 1: labels
        let mut pc: usize = 0;
        for line in lines.iter_mut() {
            match &line.stmt {
                Some(Stmt::Label(name)) => {
                    if let Err(error) = symbols.declare_label(name, pc) {
                        errors.push(LineError::new(line.no, error));
                    }
                }
                Some(_) => {
                    line.pc = u16::try_from(pc).ok();
                    pc += 1;
                }
                None => {}
            }
        }
        log::info!("  - {} instructions, {} labels", pc, symbols.labels().len());

        // Pass 2: resolve and encode
        for line in lines.iter_mut() {
            let inst = match &line.stmt {
                Some(Stmt::Addr(target)) => symbols.resolve(target).map(Inst::Addr),
                Some(Stmt::Comp { dest, comp, jump }) => Ok(Inst::Comp {
                    dest: *dest,
                    comp: *comp,
                    jump: *jump,
                }),
                _ => continue,
            };
            match inst {
                Ok(inst) => line.inst = Some(inst),
                Err(error) => errors.push(LineError::new(line.no, error)),
            }
        }
        log::info!("  - {} variables", symbols.variables().len());

        errors.sort_by_key(|e| e.line);
        Assembly {
            lines,
            symbols,
            errors,
            dialect: self.options.dialect,
        }
    }
}

/// Assembles `text` with the default options.
///
/// Every line must be a label, an address instruction or a compute
/// instruction; comments and blank lines are rejected. On failure all line
/// errors are returned, ordered by line.
pub fn assemble(text: &str) -> Result<Vec<String>, Vec<LineError>> {
    assemble_with(text, Options::default())
}

pub fn assemble_with(text: &str, options: Options) -> Result<Vec<String>, Vec<LineError>> {
    let lines = text.lines().enumerate().map(|(idx, code)| (idx + 1, code));
    let assembly = Assembler::new(options).run(lines);
    if assembly.is_ok() {
        Ok(assembly.binary())
    } else {
        Err(assembly.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use hack::inst::ADDR_MAX;

    fn run(src: &str) -> Assembly {
        let lines = src.lines().enumerate().map(|(idx, code)| (idx + 1, code));
        Assembler::new(Options::default()).run(lines)
    }

    #[test]
    fn test_add() {
        let bin = assemble("@2\nD=A\n@3\nD=D+A\n@0\nM=D").unwrap();
        assert_eq!(
            bin,
            [
                "0000000000000010",
                "1110110000010000",
                "0000000000000011",
                "1110000010010000",
                "0000000000000000",
                "1110001100001000",
            ]
        );
    }

    #[test]
    fn test_label_address() {
        let asm = run("@i\nM=1\n(LOOP)\n@LOOP\n0;JMP\n(END)");
        assert!(asm.is_ok());
        assert_eq!(asm.symbols.labels().get("LOOP"), Some(&2));
        assert_eq!(asm.symbols.labels().get("END"), Some(&4));
        assert_eq!(asm.words()[2], 2);
        let pcs: Vec<_> = asm.lines.iter().map(|l| l.pc).collect();
        assert_eq!(pcs, [Some(0), Some(1), None, Some(2), Some(3), None]);
    }

    #[test]
    fn test_forward_reference() {
        let asm = run("@END\n0;JMP\n@x\n(END)\n@END");
        assert!(asm.is_ok());
        assert_eq!(asm.words(), [3, 0b1110101010000111, 16, 3]);
        assert_eq!(asm.symbols.variables().len(), 1);
    }

    #[test]
    fn test_collects_all_errors() {
        let asm = run("@R16\nD=D^A\n(A)\n(A)\nD;JZZ\n@ok\n(B");
        let lines: Vec<_> = asm.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, [1, 2, 4, 5, 7]);
        assert!(matches!(asm.errors[0].error, Error::RegisterOutOfRange(_)));
        assert!(matches!(asm.errors[1].error, Error::UnrecognizedComp(_)));
        assert!(matches!(asm.errors[2].error, Error::DuplicateSymbol(_)));
        assert!(matches!(asm.errors[3].error, Error::UnrecognizedJump(_)));
        assert!(matches!(asm.errors[4].error, Error::UnclosedLabel(_)));
        // partial output: only `@ok` encoded
        assert_eq!(asm.binary(), ["0000000000010000"]);
    }

    #[test]
    fn test_fresh_table_per_run() {
        let assembler = Assembler::new(Options::default());
        let first = assembler.run([(1, "@a"), (2, "@b")]);
        let second = assembler.run([(1, "@b")]);
        assert_eq!(first.words(), [16, 17]);
        assert_eq!(second.words(), [16]);
    }

    #[test]
    fn test_legacy_dialect() {
        let options = Options {
            dialect: Dialect::Legacy,
            ..Options::default()
        };
        assert_eq!(
            assemble_with("0;JMP\nD;JLE", options).unwrap(),
            ["1110101010000110", "1110001100000110"]
        );
        assert_eq!(assemble("0;JMP").unwrap(), ["1110101010000111"]);
    }

    #[test]
    fn test_blank_line_rejected() {
        let errors = assemble("@1\n\nD=A").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 2);
        assert!(matches!(errors[0].error, Error::UnparsableLine(_)));
    }

    #[test]
    fn test_label_past_address_space() {
        // `(LAST)` lands on the last address, `(FAR)` one past it
        let mut src = "D=A\n".repeat(ADDR_MAX as usize);
        src.push_str("(LAST)\nD=A\n(FAR)\n@FAR");
        let far = ADDR_MAX as usize + 3;
        let asm = run(&src);
        assert_eq!(asm.errors.len(), 1);
        assert_eq!(asm.errors[0].line, far);
        assert!(matches!(&asm.errors[0].error, Error::ValueOutOfRange(s) if s == "FAR"));
        assert_eq!(asm.symbols.labels().get("LAST"), Some(&ADDR_MAX));
        assert_eq!(asm.symbols.labels().get("FAR"), None);
        assert_eq!(asm.lines[far].pc, Some(ADDR_MAX + 1));
    }

    #[test]
    fn test_trailing_newline() {
        assert_eq!(assemble("@1\n").unwrap(), ["0000000000000001"]);
    }
}
