use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use pow2_heap::{HeapConfig, PowerOfTwoMaxHeap};

use crate::input::Tokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Insert,
    PopMax,
    Print,
    Exit,
}

impl Choice {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Choice::Insert),
            2 => Some(Choice::PopMax),
            3 => Some(Choice::Print),
            4 => Some(Choice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\nChoose operation:\n1 - Insert\n2 - Pop max\n3 - Print heap\n4 - Exit\n";

/// The interactive command loop. Reads integer tokens from `R`, writes prompts
/// and outcomes to `W`.
pub struct Session<R, W> {
    tokens: Tokens<R>,
    out: W,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, quiet: bool) -> Self {
        Session {
            tokens: Tokens::new(input),
            out,
            quiet,
        }
    }

    fn prompt(&mut self, msg: &str) -> Result<()> {
        if !self.quiet {
            write!(self.out, "{msg}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn ask(&mut self, msg: &str) -> Result<i64> {
        self.prompt(msg)?;
        Ok(self.tokens.next_int()?)
    }

    /// Fills in whichever heap parameters were not given on the command line.
    pub fn read_config(
        &mut self,
        exponent: Option<i64>,
        capacity: Option<i64>,
    ) -> Result<HeapConfig> {
        let children_exponent = match exponent {
            Some(k) => k,
            None => self
                .ask("Enter children exponent (x) for 2^x children per node: ")
                .context("reading children exponent")?,
        };
        let capacity = match capacity {
            Some(c) => c,
            None => self
                .ask("Enter capacity of the heap: ")
                .context("reading capacity")?,
        };
        Ok(HeapConfig::new(children_exponent, capacity))
    }

    pub fn run(&mut self, heap: &mut PowerOfTwoMaxHeap) -> Result<()> {
        loop {
            self.prompt(MENU)?;
            self.prompt("Your choice: ")?;
            let code = self.tokens.next_int().context("reading menu choice")?;
            match Choice::from_code(code) {
                Some(Choice::Insert) => {
                    let v = self
                        .ask("Enter value to insert: ")
                        .context("reading value to insert")?;
                    match heap.insert(v) {
                        Ok(()) => writeln!(self.out, "{v} inserted.")?,
                        Err(err) => writeln!(self.out, "{err}")?,
                    }
                }
                Some(Choice::PopMax) => match heap.pop_max() {
                    Ok(v) => writeln!(self.out, "Popped max: {v}")?,
                    Err(err) => writeln!(self.out, "{err}")?,
                },
                Some(Choice::Print) => writeln!(self.out, "{}", render(heap))?,
                Some(Choice::Exit) => {
                    writeln!(self.out, "Exiting.")?;
                    return Ok(());
                }
                None => writeln!(self.out, "Invalid choice. Try again.")?,
            }
        }
    }
}

fn render(heap: &PowerOfTwoMaxHeap) -> String {
    if heap.is_empty() {
        return "Heap is empty.".to_string();
    }
    let keys: Vec<String> = heap.snapshot().iter().map(|k| k.to_string()).collect();
    format!("Heap elements: {}", keys.join(" "))
}
