use crate::types::{Count, FrequentItemsets};
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyDict, PyFrozenSet, PyList};

/// One dict per level, mapping each itemset as a `frozenset` to its count.
pub fn convert_frequent_itemsets(
    py: Python,
    frequent_itemsets: FrequentItemsets,
) -> PyResult<PyObject> {
    let levels = frequent_itemsets
        .into_iter()
        .map(|level| {
            let counts = level
                .into_iter()
                .map(|frequent| {
                    let itemset: Py<PyFrozenSet> =
                        PyFrozenSet::new(py, &frequent.itemset)?.into();
                    Ok((itemset, frequent.count))
                })
                .collect::<PyResult<Vec<(Py<PyFrozenSet>, Count)>>>()?;
            let level: Py<PyDict> = counts.into_py_dict(py).into();
            Ok(level)
        })
        .collect::<PyResult<Vec<Py<PyDict>>>>()?;

    Ok(PyList::new(py, levels).into())
}
