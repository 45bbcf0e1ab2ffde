//! Generator of pigeon-hole problems: `holes + 1` pigeons never fit into
//! `holes` holes, so every generated formula is unsatisfiable.

use {std::io::{self, Write}, structopt::StructOpt};

#[derive(Debug, StructOpt)]
#[structopt(name = "pigeon", about = "Emit a pigeon-hole CNF in DIMACS format on stdout")]
struct Opt {
    /// the number of holes; one more pigeon is generated
    holes: usize,
}

fn var(pigeon: usize, hole: usize, holes: usize) -> usize {
    (pigeon - 1) * holes + hole
}

fn main() -> io::Result<()> {
    let holes = Opt::from_args().holes;
    let pigeons = holes + 1;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "c pigeon hole problem with {holes} holes and {pigeons} pigeons"
    )?;
    writeln!(
        out,
        "p cnf {} {}",
        holes * pigeons,
        pigeons + (holes * holes * pigeons) / 2
    )?;
    // every pigeon occupies at least one hole
    for p in 1..=pigeons {
        for h in 1..=holes {
            write!(out, "{} ", var(p, h, holes))?;
        }
        writeln!(out, "0")?;
    }
    // no two pigeons share a hole
    for h in 1..=holes {
        for i in 1..pigeons {
            for j in i + 1..=pigeons {
                writeln!(out, "-{} -{} 0", var(i, h, holes), var(j, h, holes))?;
            }
        }
    }
    Ok(())
}
