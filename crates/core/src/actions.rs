//! Caller-supplied toolbar buttons.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Visual weight of a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionVariant {
	Default,
	Destructive,
	#[default]
	Outline,
	Secondary,
	Ghost,
}

type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// A button rendered next to the column menu. What it does is entirely up to
/// the caller's handler.
#[derive(Clone)]
pub struct ToolbarAction {
	pub label: String,
	pub icon: Option<String>,
	pub variant: ActionVariant,
	on_click: Option<ClickHandler>,
}

impl ToolbarAction {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			icon: None,
			variant: ActionVariant::default(),
			on_click: None,
		}
	}

	#[must_use]
	pub fn icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	#[must_use]
	pub fn variant(mut self, variant: ActionVariant) -> Self {
		self.variant = variant;
		self
	}

	#[must_use]
	pub fn on_click<F>(mut self, handler: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.on_click = Some(Arc::new(handler));
		self
	}

	/// Button caption including the icon, if any.
	pub fn caption(&self) -> String {
		match &self.icon {
			Some(icon) => format!("{icon} {}", self.label),
			None => self.label.clone(),
		}
	}

	/// Run the handler. Returns `false` when none was registered.
	pub fn trigger(&self) -> bool {
		match &self.on_click {
			Some(handler) => {
				handler();
				true
			}
			None => false,
		}
	}
}

impl fmt::Debug for ToolbarAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ToolbarAction")
			.field("label", &self.label)
			.field("icon", &self.icon)
			.field("variant", &self.variant)
			.field("on_click", &self.on_click.is_some())
			.finish()
	}
}
