//! Element checks shared by the array and collection gates.
//!
//! `whole` is what appears in failure messages; `elements` is what the
//! predicates look at. For arrays they are the same slice, for collections
//! `elements` is the collection's iteration order collected into references.

use std::fmt::Debug;

use super::{misuse, values_to_look_for, CheckError, Checks};
use crate::error::UsageError;
use crate::failures::{
    should_be_empty, should_contain, should_contain_at_index, should_contain_sequence,
    should_end_with, should_have_size, should_not_contain, should_not_contain_at_index,
    should_not_have_duplicates, should_start_with, Failures,
};
use crate::index::Index;
use crate::predicate::{
    contains_at, contains_sequence, duplicates, ends_with, has_size, is_empty, missing, present,
    starts_with, Predicate, PredicateExt,
};

pub(super) fn empty<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
{
    checks.ensure(is_empty().check(elements), || should_be_empty(whole))
}

pub(super) fn size<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
    expected: usize,
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
{
    checks.ensure(has_size(expected).check(elements), || {
        should_have_size(whole, elements.len(), expected)
    })
}

pub(super) fn contains<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
    values: Option<&[E]>,
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
    E: PartialEq + Debug,
{
    let values = values_to_look_for(values)?;
    let not_found = missing(elements, values);
    checks.ensure(not_found.is_empty(), || {
        should_contain(whole, values, &not_found)
    })
}

pub(super) fn does_not_contain<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
    values: Option<&[E]>,
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
    E: PartialEq + Debug,
{
    let values = values_to_look_for(values)?;
    let found = present(elements, values);
    checks.ensure(found.is_empty(), || should_not_contain(whole, values, &found))
}

pub(super) fn contains_at_index<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
    value: &E,
    index: Option<Index>,
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
    E: PartialEq + Debug,
{
    checks.not_empty(elements.len())?;
    let index = index.ok_or_else(|| misuse(UsageError::IndexIsNull))?;
    let position = index.check_bounds(elements.len()).map_err(misuse)?;
    checks.ensure(contains_at(value, position).check(elements), || {
        should_contain_at_index(whole, value, index)
    })
}

/// An index past the end, or an empty `elements`, passes.
pub(super) fn does_not_contain_at_index<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
    value: &E,
    index: Option<Index>,
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
    E: PartialEq + Debug,
{
    let index = index.ok_or_else(|| misuse(UsageError::IndexIsNull))?;
    checks.ensure(
        contains_at(value, index.value()).not().check(elements),
        || should_not_contain_at_index(whole, value, index),
    )
}

pub(super) fn contains_run<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
    sequence: Option<&[E]>,
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
    E: PartialEq + Debug,
{
    let sequence = values_to_look_for(sequence)?;
    checks.ensure(contains_sequence(sequence).check(elements), || {
        should_contain_sequence(whole, sequence)
    })
}

pub(super) fn starts<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
    sequence: Option<&[E]>,
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
    E: PartialEq + Debug,
{
    let sequence = values_to_look_for(sequence)?;
    checks.ensure(starts_with(sequence).check(elements), || {
        should_start_with(whole, sequence)
    })
}

pub(super) fn ends<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
    sequence: Option<&[E]>,
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
    E: PartialEq + Debug,
{
    let sequence = values_to_look_for(sequence)?;
    checks.ensure(ends_with(sequence).check(elements), || {
        should_end_with(whole, sequence)
    })
}

pub(super) fn no_duplicates<F, A, E>(
    checks: &Checks<'_, F>,
    whole: &A,
    elements: &[E],
) -> Result<(), CheckError>
where
    F: Failures,
    A: Debug + ?Sized,
    E: PartialEq + Debug,
{
    let repeated = duplicates(elements);
    checks.ensure(repeated.is_empty(), || {
        should_not_have_duplicates(whole, &repeated)
    })
}
