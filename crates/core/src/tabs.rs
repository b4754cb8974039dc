//! Tabbed layout: a strip of tabs, some of which show the live table.
//!
//! Every tab owns its own [`TableState`]. Switching parks the outgoing tab's
//! state and swaps the incoming one in, so sorting, filters and pagination
//! survive a round trip through another tab.

use std::collections::HashMap;
use std::mem;

use crate::error::TableError;
use crate::state::TableState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabBody {
	/// Render the live table.
	Table,
	/// Render caller-supplied text instead of the table.
	Static(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDef {
	pub value: String,
	pub label: String,
	pub badge: Option<String>,
	pub body: TabBody,
}

impl TabDef {
	pub fn table(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
			badge: None,
			body: TabBody::Table,
		}
	}

	pub fn content(
		value: impl Into<String>,
		label: impl Into<String>,
		content: impl Into<String>,
	) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
			badge: None,
			body: TabBody::Static(content.into()),
		}
	}

	#[must_use]
	pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
		self.badge = Some(badge.into());
		self
	}

	pub fn is_table(&self) -> bool {
		matches!(self.body, TabBody::Table)
	}
}

#[derive(Debug, Clone)]
pub struct TabSet {
	tabs: Vec<TabDef>,
	active: usize,
	parked: HashMap<String, TableState>,
}

impl TabSet {
	/// Build a tab set with `default_tab` (or the first tab) active.
	///
	/// When no tab declares a [`TabBody::Table`] body, the default tab is
	/// turned into the table tab.
	pub fn from_tabs(mut tabs: Vec<TabDef>, default_tab: Option<&str>) -> Result<Self, TableError> {
		if tabs.is_empty() {
			return Err(TableError::NoTabs);
		}
		for (index, tab) in tabs.iter().enumerate() {
			if tabs[..index].iter().any(|earlier| earlier.value == tab.value) {
				return Err(TableError::DuplicateTab {
					value: tab.value.clone(),
				});
			}
		}
		let active = match default_tab {
			Some(value) => position_of(&tabs, value)?,
			None => 0,
		};
		if !tabs.iter().any(TabDef::is_table) {
			tabs[active].body = TabBody::Table;
		}
		Ok(Self {
			tabs,
			active,
			parked: HashMap::new(),
		})
	}

	pub fn tabs(&self) -> &[TabDef] {
		&self.tabs
	}

	pub fn active_index(&self) -> usize {
		self.active
	}

	pub fn active(&self) -> &TabDef {
		&self.tabs[self.active]
	}

	pub fn is_table_active(&self) -> bool {
		self.active().is_table()
	}

	/// Make `value` the active tab, exchanging `current` (the outgoing tab's
	/// state) with the incoming tab's parked state. Tabs visited for the first
	/// time start from `fresh()`. Returns whether the active tab changed.
	pub fn switch(
		&mut self,
		value: &str,
		current: &mut TableState,
		fresh: impl FnOnce() -> TableState,
	) -> Result<bool, TableError> {
		let target = position_of(&self.tabs, value)?;
		if target == self.active {
			return Ok(false);
		}
		let incoming = self.parked.remove(value).unwrap_or_else(fresh);
		let outgoing = mem::replace(current, incoming);
		self.parked
			.insert(self.tabs[self.active].value.clone(), outgoing);
		self.active = target;
		log::debug!("switched to tab '{value}'");
		Ok(true)
	}

	/// Value of the tab `step` positions away from the active one, wrapping.
	pub fn neighbor(&self, step: isize) -> &str {
		let len = self.tabs.len() as isize;
		let index = (self.active as isize + step).rem_euclid(len) as usize;
		&self.tabs[index].value
	}
}

fn position_of(tabs: &[TabDef], value: &str) -> Result<usize, TableError> {
	tabs.iter()
		.position(|tab| tab.value == value)
		.ok_or_else(|| TableError::UnknownTab {
			value: value.to_owned(),
		})
}
