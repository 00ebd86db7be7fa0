//! Futoshiki grid models.
//!
//! A Futoshiki puzzle is an n×n Latin square with optional inequality signs
//! between horizontally adjacent cells. Two encodings are provided: one
//! using binary not-equal constraints for the row and column rules, and one
//! using n-ary all-different constraints. Both use binary tables for the
//! inequality signs, and both enumerate their tables once, at model-build
//! time, from the variables' domains.

use std::fmt;

use crate::{
    error::Result,
    solver::{
        constraint::TableConstraint,
        csp::Csp,
        engine::VariableId,
        solution::Solution,
        value::StandardValue,
        variable::Variable,
    },
};

/// An inequality between a cell and its right-hand neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    LessThan,
    GreaterThan,
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::LessThan => write!(f, "<"),
            Sign::GreaterThan => write!(f, ">"),
        }
    }
}

/// A Futoshiki instance: given cells and inequality signs on an n×n grid.
#[derive(Debug, Clone)]
pub struct FutoshikiBoard {
    n: usize,
    cells: Vec<Vec<i64>>,
    row_signs: Vec<Vec<Option<Sign>>>,
}

impl FutoshikiBoard {
    /// An empty n×n board: every cell open, no signs.
    pub fn open(n: usize) -> Self {
        Self {
            n,
            cells: vec![vec![0; n]; n],
            row_signs: vec![vec![None; n.saturating_sub(1)]; n],
        }
    }

    /// Fixes the cell at (row, col) to `value`.
    pub fn with_given(mut self, row: usize, col: usize, value: i64) -> Self {
        self.cells[row][col] = value;
        self
    }

    /// Places `sign` between (row, col) and (row, col + 1).
    pub fn with_sign(mut self, row: usize, col: usize, sign: Sign) -> Self {
        self.row_signs[row][col] = Some(sign);
        self
    }

    pub fn size(&self) -> usize {
        self.n
    }
}

/// Builds the grid variables: open cells get the full 1..=n domain, givens
/// a singleton.
fn grid_vars(board: &FutoshikiBoard, csp: &mut Csp<StandardValue>) -> Result<Vec<Vec<VariableId>>> {
    let n = board.n;
    let full: Vec<StandardValue> = (1..=n as i64).map(StandardValue::Int).collect();
    let mut grid = Vec::with_capacity(n);
    for r in 0..n {
        let mut row = Vec::with_capacity(n);
        for c in 0..n {
            let domain = match board.cells[r][c] {
                0 => full.clone(),
                given => vec![StandardValue::Int(given)],
            };
            row.push(csp.add_var(Variable::new(format!("V{r}{c}"), domain)?));
        }
        grid.push(row);
    }
    Ok(grid)
}

/// Binary tuples over two domains, filtered by a predicate.
fn binary_tuples(
    d1: &[StandardValue],
    d2: &[StandardValue],
    keep: impl Fn(&StandardValue, &StandardValue) -> bool,
) -> Vec<Vec<StandardValue>> {
    let mut tuples = Vec::new();
    for a in d1 {
        for b in d2 {
            if keep(a, b) {
                tuples.push(vec![a.clone(), b.clone()]);
            }
        }
    }
    tuples
}

/// The cross product of the domains, restricted to pairwise-distinct
/// tuples. Prefixes that already repeat a value are never extended, which
/// yields the same table as filtering the full product.
fn all_different_tuples(domains: &[Vec<StandardValue>]) -> Vec<Vec<StandardValue>> {
    let mut acc: Vec<Vec<StandardValue>> = vec![Vec::new()];
    for pool in domains {
        let mut next = Vec::new();
        for prefix in &acc {
            for value in pool {
                if !prefix.contains(value) {
                    let mut tuple = prefix.clone();
                    tuple.push(value.clone());
                    next.push(tuple);
                }
            }
        }
        acc = next;
    }
    acc
}

fn add_not_equal(
    csp: &mut Csp<StandardValue>,
    v1: VariableId,
    v2: VariableId,
) -> Result<()> {
    let d1 = csp.var(v1).cur_domain();
    let d2 = csp.var(v2).cur_domain();
    let name = format!("{} != {}", csp.var(v1).name(), csp.var(v2).name());
    let tuples = binary_tuples(&d1, &d2, |a, b| a != b);
    csp.add_constraint(TableConstraint::new(name, vec![v1, v2], tuples)?)?;
    Ok(())
}

fn add_sign_constraints(
    board: &FutoshikiBoard,
    csp: &mut Csp<StandardValue>,
    grid: &[Vec<VariableId>],
) -> Result<()> {
    for (r, signs) in board.row_signs.iter().enumerate() {
        for (c, sign) in signs.iter().enumerate() {
            let Some(sign) = sign else { continue };
            let (v1, v2) = (grid[r][c], grid[r][c + 1]);
            let d1 = csp.var(v1).cur_domain();
            let d2 = csp.var(v2).cur_domain();
            let name = format!("{} {sign} {}", csp.var(v1).name(), csp.var(v2).name());
            let tuples = match sign {
                Sign::LessThan => binary_tuples(&d1, &d2, |a, b| a < b),
                Sign::GreaterThan => binary_tuples(&d1, &d2, |a, b| a > b),
            };
            csp.add_constraint(TableConstraint::new(name, vec![v1, v2], tuples)?)?;
        }
    }
    Ok(())
}

/// Encodes a board with binary not-equal constraints for every pair of
/// cells in each row and each column, plus the inequality signs.
pub fn futoshiki_model_1(
    board: &FutoshikiBoard,
) -> Result<(Csp<StandardValue>, Vec<Vec<VariableId>>)> {
    let n = board.n;
    let mut csp = Csp::new(format!("futoshiki model 1 - {n}x{n}"));
    let grid = grid_vars(board, &mut csp)?;
    add_sign_constraints(board, &mut csp, &grid)?;

    for i in 0..n {
        for j in 0..n {
            for k in (j + 1)..n {
                add_not_equal(&mut csp, grid[i][j], grid[i][k])?;
                add_not_equal(&mut csp, grid[j][i], grid[k][i])?;
            }
        }
    }
    Ok((csp, grid))
}

/// Encodes a board with one n-ary all-different constraint per row and per
/// column, plus the inequality signs.
pub fn futoshiki_model_2(
    board: &FutoshikiBoard,
) -> Result<(Csp<StandardValue>, Vec<Vec<VariableId>>)> {
    let n = board.n;
    let mut csp = Csp::new(format!("futoshiki model 2 - {n}x{n}"));
    let grid = grid_vars(board, &mut csp)?;
    add_sign_constraints(board, &mut csp, &grid)?;

    for i in 0..n {
        let row_vars: Vec<VariableId> = grid[i].clone();
        let col_vars: Vec<VariableId> = (0..n).map(|j| grid[j][i]).collect();
        for (name, vars) in [
            (format!("all-diff row {i}"), row_vars),
            (format!("all-diff col {i}"), col_vars),
        ] {
            let domains: Vec<Vec<StandardValue>> =
                vars.iter().map(|&v| csp.var(v).cur_domain()).collect();
            let tuples = all_different_tuples(&domains);
            csp.add_constraint(TableConstraint::new(name, vars, tuples)?)?;
        }
    }
    Ok((csp, grid))
}

/// Reads the solved grid back out of a solution.
pub fn solved_grid(solution: &Solution<StandardValue>, grid: &[Vec<VariableId>]) -> Vec<Vec<i64>> {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|&vid| {
                    solution
                        .value(vid)
                        .as_int()
                        .expect("futoshiki domains are integers")
                })
                .collect()
        })
        .collect()
}
