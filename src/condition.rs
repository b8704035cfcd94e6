//! Predicates evaluated once per poll by [`crate::wait::WaitSpec::until`].

use crate::document::{Document, Element};
use crate::error::{DriverError, ErrorKind};
use crate::locator::Locator;
use crate::wait::Check;
use futures::future::try_join_all;

async fn all_visible<E: Element>(elements: &[E]) -> Result<bool, DriverError> {
    let visible = try_join_all(elements.iter().map(|element| element.is_visible())).await?;
    Ok(visible.into_iter().all(|it| it))
}

async fn all_clickable<E: Element>(elements: &[E]) -> Result<bool, DriverError> {
    if !all_visible(elements).await? {
        return Ok(false);
    }
    let enabled = try_join_all(elements.iter().map(|element| element.is_enabled())).await?;
    Ok(enabled.into_iter().all(|it| it))
}

pub(crate) async fn present<D: Document>(doc: &D, locator: &Locator) -> Check<D::Element> {
    doc.query(locator).await.map(Some)
}

pub(crate) async fn element_visible<E: Element>(element: &E) -> Check<E> {
    Ok(element.is_visible().await?.then(|| element.clone()))
}

pub(crate) async fn visible<D: Document>(doc: &D, locator: &Locator) -> Check<D::Element> {
    let element = doc.query(locator).await?;
    element_visible(&element).await
}

pub(crate) async fn element_clickable<E: Element>(element: &E) -> Check<E> {
    let clickable = element.is_visible().await? && element.is_enabled().await?;
    Ok(clickable.then(|| element.clone()))
}

pub(crate) async fn clickable<D: Document>(doc: &D, locator: &Locator) -> Check<D::Element> {
    let element = doc.query(locator).await?;
    element_clickable(&element).await
}

pub(crate) async fn nested_present_in<E: Element>(parent: &E, child: &Locator) -> Check<E> {
    parent.child(child).await.map(Some)
}

pub(crate) async fn nested_present<D: Document>(
    doc: &D,
    parent: &Locator,
    child: &Locator,
) -> Check<D::Element> {
    let parent = doc.query(parent).await?;
    nested_present_in(&parent, child).await
}

pub(crate) async fn all_present<D: Document>(
    doc: &D,
    locator: &Locator,
) -> Check<Vec<D::Element>> {
    let elements = doc.query_all(locator).await?;
    Ok((!elements.is_empty()).then_some(elements))
}

pub(crate) async fn all_visible_located<D: Document>(
    doc: &D,
    locator: &Locator,
) -> Check<Vec<D::Element>> {
    let elements = doc.query_all(locator).await?;
    if elements.is_empty() || !all_visible(&elements).await? {
        return Ok(None);
    }
    Ok(Some(elements))
}

pub(crate) async fn nested_all_visible_in<E: Element>(parent: &E, child: &Locator) -> Check<Vec<E>> {
    let children = parent.children(child).await?;
    if children.is_empty() || !all_visible(&children).await? {
        return Ok(None);
    }
    Ok(Some(children))
}

pub(crate) async fn nested_all_visible<D: Document>(
    doc: &D,
    parent: &Locator,
    child: &Locator,
) -> Check<Vec<D::Element>> {
    let parent = doc.query(parent).await?;
    nested_all_visible_in(&parent, child).await
}

pub(crate) async fn nested_all_clickable_in<E: Element>(
    parent: &E,
    child: &Locator,
) -> Check<Vec<E>> {
    let children = parent.children(child).await?;
    if children.is_empty() || !all_clickable(&children).await? {
        return Ok(None);
    }
    Ok(Some(children))
}

pub(crate) async fn text_present<D: Document>(doc: &D, locator: &Locator, text: &str) -> Check<()> {
    let element = doc.query(locator).await?;
    Ok(element.visible_text().await?.contains(text).then_some(()))
}

/// Satisfied when the element is hidden, detached or was never there.
pub(crate) async fn element_invisible<E: Element>(element: &E) -> Check<()> {
    match element.is_visible().await {
        Ok(visible) => Ok((!visible).then_some(())),
        Err(err)
            if matches!(
                err.kind,
                ErrorKind::NoSuchElement | ErrorKind::StaleElementReference
            ) =>
        {
            Ok(Some(()))
        }
        Err(err) => Err(err),
    }
}

/// Satisfied when nothing matches `locator` or the first match is hidden.
pub(crate) async fn invisible<D: Document>(doc: &D, locator: &Locator) -> Check<()> {
    let elements = doc.query_all(locator).await?;
    match elements.first() {
        None => Ok(Some(())),
        Some(element) => element_invisible(element).await,
    }
}

pub(crate) async fn input_populated<D: Document>(doc: &D, locator: &Locator) -> Check<D::Element> {
    let element = doc.query(locator).await?;
    let populated = element
        .attribute_value("value")
        .await?
        .is_some_and(|value| !value.is_empty());
    Ok(populated.then_some(element))
}

pub(crate) async fn element_count<D: Document>(
    doc: &D,
    locator: &Locator,
    expected: usize,
) -> Check<Vec<D::Element>> {
    let elements = doc.query_all(locator).await?;
    Ok((elements.len() == expected).then_some(elements))
}

pub(crate) async fn attribute_is<D: Document>(
    doc: &D,
    locator: &Locator,
    attribute: &str,
    expected: &str,
) -> Check<()> {
    let element = doc.query(locator).await?;
    let actual = element.attribute_value(attribute).await?;
    Ok((actual.as_deref() == Some(expected)).then_some(()))
}

pub(crate) async fn attribute_contains<D: Document>(
    doc: &D,
    locator: &Locator,
    attribute: &str,
    expected: &str,
) -> Check<()> {
    let element = doc.query(locator).await?;
    let actual = element.attribute_value(attribute).await?;
    Ok(actual
        .is_some_and(|value| value.contains(expected))
        .then_some(()))
}
