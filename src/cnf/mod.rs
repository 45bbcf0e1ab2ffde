//! Module `cnf` provides the DIMACS CNF reader. It owns the textual
//! boundary completely: the solver core never parses text, and structural
//! violations surface here as errors before search can start.

use {
    crate::{
        solver::{SatSolverIF, Solver},
        types::*,
    },
    std::io::BufRead,
};

/// Parse a DIMACS CNF stream and feed it into a fresh solver.
///
/// Comment lines start with `c`; the single header line is
/// `p cnf <num_vars> <num_clauses>`; clauses are sequences of signed
/// non-zero integers terminated by `0` and may span lines.
///
/// A root-level conflict among the clauses is not an error: it is latched
/// in the solver and `solve()` reports UNSAT.
///
/// # Errors
///
/// `InvalidHeader`, `InvalidLiteral`, `UnterminatedClause`,
/// `WrongClauseCount`, or an I/O failure.
pub fn load_cnf<R: BufRead>(
    config: &Config,
    reader: &mut R,
    pathname: &str,
) -> Result<Solver, SolverError> {
    let mut line = String::new();
    let (nv, nc) = loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(SolverError::InvalidHeader);
        }
        let l = line.trim();
        if l.is_empty() || l.starts_with('c') {
            continue;
        }
        let mut tokens = l.split_whitespace();
        if tokens.next() != Some("p") || tokens.next() != Some("cnf") {
            return Err(SolverError::InvalidHeader);
        }
        let nv = tokens.next().and_then(|s| s.parse::<usize>().ok());
        let nc = tokens.next().and_then(|s| s.parse::<usize>().ok());
        match (nv, nc, tokens.next()) {
            (Some(nv), Some(nc), None) => break (nv, nc),
            _ => return Err(SolverError::InvalidHeader),
        }
    };
    let cnf = CNFDescription {
        num_of_variables: nv,
        num_of_clauses: nc,
        pathname: pathname.to_string(),
    };
    let mut solver = Solver::instantiate(config, &cnf);
    let mut found = 0;
    let mut clause: Vec<i32> = Vec::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let l = line.trim();
        if l.is_empty() || l.starts_with('c') {
            continue;
        }
        for token in l.split_whitespace() {
            let val = token
                .parse::<i32>()
                .map_err(|_| SolverError::InvalidLiteral(token.to_string()))?;
            if val == 0 {
                solver.add_clause(&clause);
                clause.clear();
                found += 1;
            } else if nv < val.unsigned_abs() as usize {
                return Err(SolverError::InvalidLiteral(token.to_string()));
            } else {
                clause.push(val);
            }
        }
    }
    if !clause.is_empty() {
        return Err(SolverError::UnterminatedClause);
    }
    if found != nc {
        return Err(SolverError::WrongClauseCount {
            declared: nc,
            found,
        });
    }
    Ok(solver)
}
