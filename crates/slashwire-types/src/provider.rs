//! Autocomplete provider capability attached to leaf options.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::interaction::{Member, User};
use crate::option::ChoiceValue;

/// Who is typing: the invoking user and, inside a guild, their member entry.
#[derive(Debug, Clone)]
pub struct Invoker {
    pub user: User,
    pub member: Option<Member>,
}

/// A suggestion produced by a provider, before stringification.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub name: String,
    pub value: ChoiceValue,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, value: impl Into<ChoiceValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Produces suggestions for a partially typed option value.
///
/// Providers cannot fail. One that has nothing to offer, or whose backing
/// lookup failed, returns an empty list.
#[async_trait]
pub trait AutocompleteProvider: Send + Sync {
    /// `partial` is the raw value typed so far, or `None` if the payload
    /// carried no value for the focused option.
    async fn suggest(&self, partial: Option<serde_json::Value>, invoker: Invoker) -> Vec<Suggestion>;
}

struct FnProvider<F>(F);

#[async_trait]
impl<F, Fut> AutocompleteProvider for FnProvider<F>
where
    F: Fn(Option<serde_json::Value>, Invoker) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Vec<Suggestion>> + Send + 'static,
{
    async fn suggest(&self, partial: Option<serde_json::Value>, invoker: Invoker) -> Vec<Suggestion> {
        (self.0)(partial, invoker).await
    }
}

/// Wrap an async closure as a shareable provider.
pub fn provider_fn<F, Fut>(f: F) -> Arc<dyn AutocompleteProvider>
where
    F: Fn(Option<serde_json::Value>, Invoker) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Vec<Suggestion>> + Send + 'static,
{
    Arc::new(FnProvider(f))
}
