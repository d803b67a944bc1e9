// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The board aggregate.
//!
//! [`Board`] owns every [`Issue`] and [`User`] and is the only place they are
//! created, mutated or destroyed. Parent, child and assignee links are stored
//! as ids into the board's maps, so every operation that touches a link
//! repairs the other side of it before returning.
//!
//! All operations validate before mutating: a call that returns an error
//! leaves the board unchanged.

use indexmap::IndexMap;

use crate::clock::{ClockSource, MonotonicClock, SystemClock};
use crate::error::{Error, Result};
use crate::id::IdGenerator;
use crate::issue::{Issue, IssueType, State};
use crate::query::IssueQuery;
use crate::user::User;

/// Aggregate root holding all issues and users.
pub struct Board<C: ClockSource = SystemClock> {
    issues: IndexMap<String, Issue>,
    users: IndexMap<String, User>,
    issue_ids: IdGenerator,
    user_ids: IdGenerator,
    clock: MonotonicClock<C>,
}

impl Board<SystemClock> {
    /// Creates an empty board using the system clock and default id prefixes.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Board<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockSource> Board<C> {
    /// Creates an empty board with a custom clock source.
    pub fn with_clock(clock: C) -> Self {
        Board {
            issues: IndexMap::new(),
            users: IndexMap::new(),
            issue_ids: IdGenerator::for_issues(),
            user_ids: IdGenerator::for_users(),
            clock: MonotonicClock::with_source(clock),
        }
    }

    /// Replaces the id prefixes (builder pattern).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if either prefix is invalid.
    pub fn with_prefixes(mut self, issue_prefix: &str, user_prefix: &str) -> Result<Self> {
        self.issue_ids = IdGenerator::new(issue_prefix)?;
        self.user_ids = IdGenerator::new(user_prefix)?;
        Ok(self)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Issues
    // ─────────────────────────────────────────────────────────────────────

    /// Creates a new issue in state todo and returns its id.
    pub fn add_issue(&mut self, title: impl Into<String>, issue_type: IssueType) -> String {
        let title = title.into();
        let created_at = self.clock.now();
        let id = self.issue_ids.next_id(&title, &created_at);

        tracing::debug!(issue_id = %id, %issue_type, "added issue");
        self.issues
            .insert(id.clone(), Issue::new(id.clone(), title, issue_type, created_at));
        id
    }

    /// Looks up an issue. Unknown ids yield `None`.
    pub fn get_issue(&self, issue_id: &str) -> Option<&Issue> {
        self.issues.get(issue_id)
    }

    /// Removes an issue, splicing it out of the tree.
    ///
    /// Children are re-parented to the removed issue's parent and take its
    /// place in that parent's children list; without a parent they become
    /// roots. The issue is also dropped from its assignee's list.
    pub fn remove_issue(&mut self, issue_id: &str) -> Result<()> {
        let issue = self
            .issues
            .shift_remove(issue_id)
            .ok_or_else(|| Error::IssueNotFound(issue_id.to_string()))?;

        let grandparent = issue.parent().map(str::to_string);
        for child_id in issue.children() {
            if let Some(child) = self.issues.get_mut(child_id) {
                child.set_parent(grandparent.clone());
            }
        }
        if let Some(parent) = grandparent.as_deref().and_then(|id| self.issues.get_mut(id)) {
            parent.splice_child(issue_id, issue.children());
        }
        if let Some(user) = issue.assignee().and_then(|id| self.users.get_mut(id)) {
            user.remove_issue(issue_id);
        }

        tracing::info!(
            issue_id,
            children = issue.children().len(),
            "removed issue"
        );
        Ok(())
    }

    /// Attaches `child_id` under `parent_id`.
    ///
    /// The child is detached from any previous parent first. Re-attaching to
    /// the current parent is a no-op.
    ///
    /// # Errors
    ///
    /// - [`Error::IssueNotFound`] if either id is unknown.
    /// - [`Error::InvalidOperation`] if the type pairing is not allowed or
    ///   the parent lies inside the child's own subtree.
    pub fn set_parent_issue(&mut self, child_id: &str, parent_id: &str) -> Result<()> {
        let child = self.issue(child_id)?;
        let parent = self.issue(parent_id)?;

        child
            .issue_type()
            .check_parent(parent.issue_type())
            .map_err(|rule| Error::InvalidOperation(rule.to_string()))?;

        if self.is_in_subtree(parent_id, child_id) {
            return Err(Error::InvalidOperation(format!(
                "{parent_id} is inside the subtree of {child_id}: would create a cycle"
            )));
        }

        let previous = child.parent().map(str::to_string);
        if previous.as_deref() == Some(parent_id) {
            return Ok(());
        }

        if let Some(old) = previous.as_deref().and_then(|id| self.issues.get_mut(id)) {
            old.remove_child(child_id);
        }
        self.issue_mut(child_id)?
            .set_parent(Some(parent_id.to_string()));
        self.issue_mut(parent_id)?.add_child(child_id.to_string());

        tracing::debug!(
            issue_id = child_id,
            parent_id,
            previous = previous.as_deref().unwrap_or("-"),
            "set parent"
        );
        Ok(())
    }

    /// Sets the state of an issue.
    ///
    /// Moving to done requires every descendant to already be done. Any
    /// other transition, including leaving done, is allowed.
    pub fn set_issue_state(&mut self, issue_id: &str, state: State) -> Result<()> {
        let issue = self.issue(issue_id)?;
        if state.is_done() && !self.check_all_done(issue) {
            return Err(Error::InvalidOperation(format!(
                "cannot mark {issue_id} done: not all children are done"
            )));
        }

        let issue = self.issue_mut(issue_id)?;
        let from = issue.state();
        issue.set_state(state);

        tracing::debug!(issue_id, %from, to = %state, "set state");
        Ok(())
    }

    /// Returns true if every descendant of `issue` is done.
    ///
    /// The issue's own state is not considered, so a leaf is vacuously done.
    pub fn check_all_done(&self, issue: &Issue) -> bool {
        let mut stack: Vec<&str> = issue.children().iter().map(String::as_str).collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.issues.get(id) else {
                continue;
            };
            if !node.state().is_done() {
                return false;
            }
            stack.extend(node.children().iter().map(String::as_str));
        }
        true
    }

    /// Returns the direct children of an issue, in attachment order.
    pub fn children_of(&self, issue_id: &str) -> Result<Vec<&Issue>> {
        let issue = self.issue(issue_id)?;
        Ok(issue
            .children()
            .iter()
            .filter_map(|id| self.issues.get(id))
            .collect())
    }

    /// Returns every issue without a parent, in creation order.
    pub fn roots(&self) -> Vec<&Issue> {
        self.issues
            .values()
            .filter(|issue| issue.parent().is_none())
            .collect()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────

    /// Creates a new user and returns its id.
    pub fn add_user(&mut self, name: impl Into<String>) -> String {
        let name = name.into();
        let now = self.clock.now();
        let id = self.user_ids.next_id(&name, &now);

        tracing::debug!(user_id = %id, "added user");
        self.users.insert(id.clone(), User::new(id.clone(), name));
        id
    }

    /// Removes a user, clearing the assignee of every issue assigned to them.
    pub fn remove_user(&mut self, user_id: &str) -> Result<()> {
        let user = self
            .users
            .shift_remove(user_id)
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;

        for issue_id in user.issues() {
            if let Some(issue) = self.issues.get_mut(issue_id) {
                if issue.assignee() == Some(user_id) {
                    issue.set_assignee(None);
                }
            }
        }

        tracing::info!(user_id, unassigned = user.issues().len(), "removed user");
        Ok(())
    }

    /// Looks up a user. Unknown ids yield `None`.
    pub fn get_user(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    /// Returns all users in creation order.
    pub fn get_users(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Assigns an issue to a user.
    ///
    /// The issue is removed from its previous assignee's list first.
    /// Assigning to the current assignee is a no-op.
    pub fn assign_user(&mut self, user_id: &str, issue_id: &str) -> Result<()> {
        if !self.users.contains_key(user_id) {
            return Err(Error::UserNotFound(user_id.to_string()));
        }
        let previous = self.issue(issue_id)?.assignee().map(str::to_string);
        if previous.as_deref() == Some(user_id) {
            return Ok(());
        }

        if let Some(old) = previous.as_deref().and_then(|id| self.users.get_mut(id)) {
            old.remove_issue(issue_id);
        }
        self.issue_mut(issue_id)?
            .set_assignee(Some(user_id.to_string()));
        if let Some(user) = self.users.get_mut(user_id) {
            user.add_issue(issue_id.to_string());
        }

        tracing::debug!(issue_id, user_id, "assigned issue");
        Ok(())
    }

    /// Clears the assignee of an issue. No-op if it is unassigned.
    pub fn unassign_issue(&mut self, issue_id: &str) -> Result<()> {
        let issue = self.issue_mut(issue_id)?;
        let Some(user_id) = issue.assignee().map(str::to_string) else {
            return Ok(());
        };
        issue.set_assignee(None);
        if let Some(user) = self.users.get_mut(&user_id) {
            user.remove_issue(issue_id);
        }

        tracing::debug!(issue_id, user_id = %user_id, "unassigned issue");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Query
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the issues matching every filter in `query`, in creation order.
    pub fn get_issues(&self, query: &IssueQuery) -> Vec<&Issue> {
        self.issues
            .values()
            .filter(|issue| query.matches(issue))
            .collect()
    }

    fn issue(&self, issue_id: &str) -> Result<&Issue> {
        self.issues
            .get(issue_id)
            .ok_or_else(|| Error::IssueNotFound(issue_id.to_string()))
    }

    fn issue_mut(&mut self, issue_id: &str) -> Result<&mut Issue> {
        self.issues
            .get_mut(issue_id)
            .ok_or_else(|| Error::IssueNotFound(issue_id.to_string()))
    }

    /// True if `candidate` is `root` or one of its descendants.
    ///
    /// Backstop for the cycle rule: unreachable while the type rules hold,
    /// since tasks never have children and stories only sit under epics.
    fn is_in_subtree(&self, candidate: &str, root: &str) -> bool {
        let mut current = Some(candidate);
        while let Some(id) = current {
            if id == root {
                return true;
            }
            current = self.issues.get(id).and_then(Issue::parent);
        }
        false
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
