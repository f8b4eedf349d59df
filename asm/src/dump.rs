use color_print::cformat;

use crate::assembler::Assembly;
use crate::source::Source;

/// Listing of every source line: address, machine word and statement.
pub fn listing(assembly: &Assembly, source: &Source) -> Vec<String> {
    let mut out = vec![format!(
        "{}+------[{}]{}",
        "-".repeat(25),
        source.path,
        "-".repeat(40usize.saturating_sub(source.path.len()))
    )];

    let mut listed = assembly.lines.iter().peekable();
    for (idx, raw) in (1..).zip(source_lines(source)) {
        let line = listed.next_if(|line| line.no == idx);

        let comment = raw
            .split_once("//")
            .map(|(_, comment)| cformat!("<dim>//{}</>", comment))
            .unwrap_or_default();

        let body = match line {
            None => format!("{:25}| {:>4}: {}", "", idx, comment),
            Some(line) => {
                let pc = line
                    .pc
                    .map(|pc| format!("{:04X}", pc))
                    .unwrap_or_else(|| "    ".to_string());
                let bin = match (&line.stmt, &line.inst) {
                    (_, Some(inst)) => inst.to_text(assembly.dialect),
                    (Some(stmt), None) if !stmt.is_inst() => " ".repeat(16),
                    _ => cformat!("<r,s>{}</>", "!".repeat(16)),
                };
                let stmt = match (&line.inst, &line.stmt) {
                    (Some(inst), _) => inst.cformat(),
                    (None, Some(stmt)) => stmt.cformat(),
                    (None, None) => cformat!("<r,u>{}</>", line.code),
                };
                format!("[{}] {} | {:>4}:   {} {}", pc, bin, idx, stmt, comment)
            }
        };
        out.push(body);
    }
    out.push(format!("{}+{}", "-".repeat(25), "-".repeat(53)));
    out
}

fn source_lines(source: &Source) -> impl Iterator<Item = &str> {
    (1..).map_while(move |no| source.raw(no))
}
