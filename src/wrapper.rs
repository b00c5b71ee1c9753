use crate::{
    config::MiningConfig,
    error::MiningError,
    types::{Itemset, ItemsetCounts, ItemsetSet, SupportCount},
};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyDict, PyFrozenSet};

type PyMinedItemsets = (Py<PyDict>, Vec<Py<PyFrozenSet>>, Vec<Py<PyFrozenSet>>);

impl From<MiningError> for PyErr {
    fn from(err: MiningError) -> PyErr {
        match err {
            MiningError::InvalidMinSupport { .. } => PyValueError::new_err(err.to_string()),
            MiningError::Io(_) | MiningError::Csv(_) => PyIOError::new_err(err.to_string()),
        }
    }
}

/// Mine frequent, closed and maximal itemsets.
#[pyfunction]
#[pyo3(text_signature = "(transactions, min_support, /)")]
pub fn mine_itemsets(
    py: Python,
    transactions: Vec<Vec<String>>,
    min_support: i64,
) -> PyResult<PyMinedItemsets> {
    let config = MiningConfig::new(support_threshold(min_support)?)?;
    let mined = py.allow_threads(|| crate::mine(&transactions, &config))?;

    Ok((
        convert_itemset_counts(py, mined.frequent)?,
        convert_itemsets(py, mined.closed)?,
        convert_itemsets(py, mined.maximal)?,
    ))
}

/// Python ints are unbounded, so negative and oversized thresholds are
/// rejected here instead of failing argument extraction.
fn support_threshold(min_support: i64) -> Result<SupportCount, MiningError> {
    SupportCount::try_from(min_support)
        .ok()
        .filter(|&threshold| threshold >= 1)
        .ok_or(MiningError::InvalidMinSupport { min_support })
}

fn frozenset(py: Python, itemset: Itemset) -> PyResult<Py<PyFrozenSet>> {
    Ok(PyFrozenSet::new(py, &itemset)?.into())
}

fn convert_itemset_counts(py: Python, itemset_counts: ItemsetCounts) -> PyResult<Py<PyDict>> {
    let entries = itemset_counts
        .into_iter()
        .map(|(itemset, count)| Ok((frozenset(py, itemset)?, count)))
        .collect::<PyResult<Vec<(Py<PyFrozenSet>, SupportCount)>>>()?;
    Ok(entries.into_py_dict(py).into())
}

fn convert_itemsets(py: Python, itemsets: ItemsetSet) -> PyResult<Vec<Py<PyFrozenSet>>> {
    itemsets
        .into_iter()
        .map(|itemset| frozenset(py, itemset))
        .collect()
}
