// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Synchronous change-notification channel
//!
//! An explicit observer registry: subscribers are held in a list, fan-out is
//! ordered and happens on the firing thread. Subscriptions are RAII handles
//! that remove the listener on drop.

use std::{
	panic::{AssertUnwindSafe, catch_unwind},
	sync::{
		Arc, Weak,
		atomic::{AtomicU64, Ordering},
	},
};

use parking_lot::RwLock;

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Listeners<E> {
	entries: RwLock<Vec<(u64, Listener<E>)>>,
}

/// One notification channel.
pub struct Emitter<E> {
	listeners: Arc<Listeners<E>>,
	next_id: AtomicU64,
}

impl<E: 'static> Emitter<E> {
	pub fn new() -> Self {
		Self {
			listeners: Arc::new(Listeners {
				entries: RwLock::new(Vec::new()),
			}),
			next_id: AtomicU64::new(0),
		}
	}

	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&E) + Send + Sync + 'static,
	{
		let id = self.next_id.fetch_add(1, Ordering::Relaxed);
		self.listeners.entries.write().push((id, Arc::new(listener)));

		let weak: Weak<Listeners<E>> = Arc::downgrade(&self.listeners);
		Subscription {
			remove: Some(Box::new(move || {
				if let Some(listeners) = weak.upgrade() {
					listeners.entries.write().retain(|(entry_id, _)| *entry_id != id);
				}
			})),
		}
	}

	/// Ordered fan-out to the listeners subscribed at fire time. A
	/// panicking listener is isolated so the remaining listeners still
	/// run. The listener list lock is not held while listeners execute.
	pub fn fire(&self, event: &E) {
		let snapshot: Vec<Listener<E>> = self
			.listeners
			.entries
			.read()
			.iter()
			.map(|(_, listener)| Arc::clone(listener))
			.collect();
		for listener in snapshot {
			let _ = catch_unwind(AssertUnwindSafe(|| listener(event)));
		}
	}

	pub fn subscriber_count(&self) -> usize {
		self.listeners.entries.read().len()
	}
}

impl<E: 'static> Default for Emitter<E> {
	fn default() -> Self {
		Self::new()
	}
}

/// Handle returned from [`Emitter::subscribe`]; dropping it removes the
/// listener.
pub struct Subscription {
	remove: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
	/// An inert handle, used by the null service.
	pub fn none() -> Self {
		Self {
			remove: None,
		}
	}

	pub fn unsubscribe(mut self) {
		if let Some(remove) = self.remove.take() {
			remove();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(remove) = self.remove.take() {
			remove();
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{
		Arc, Mutex,
		atomic::{AtomicUsize, Ordering},
	};

	use super::{Emitter, Subscription};

	#[test]
	fn test_fire_without_subscribers() {
		let emitter: Emitter<u32> = Emitter::new();
		emitter.fire(&1);
	}

	#[test]
	fn test_ordered_fan_out() {
		let emitter: Emitter<u32> = Emitter::new();
		let order = Arc::new(Mutex::new(Vec::new()));

		let first = {
			let order = Arc::clone(&order);
			emitter.subscribe(move |event| order.lock().unwrap().push(("first", *event)))
		};
		let second = {
			let order = Arc::clone(&order);
			emitter.subscribe(move |event| order.lock().unwrap().push(("second", *event)))
		};

		emitter.fire(&7);
		assert_eq!(*order.lock().unwrap(), vec![("first", 7), ("second", 7)]);

		drop(first);
		drop(second);
	}

	#[test]
	fn test_dropped_subscription_stops_delivery() {
		let emitter: Emitter<u32> = Emitter::new();
		let count = Arc::new(AtomicUsize::new(0));

		let subscription = {
			let count = Arc::clone(&count);
			emitter.subscribe(move |_| {
				count.fetch_add(1, Ordering::SeqCst);
			})
		};

		emitter.fire(&1);
		drop(subscription);
		emitter.fire(&2);

		assert_eq!(count.load(Ordering::SeqCst), 1);
		assert_eq!(emitter.subscriber_count(), 0);
	}

	#[test]
	fn test_explicit_unsubscribe() {
		let emitter: Emitter<u32> = Emitter::new();
		let subscription = emitter.subscribe(|_| {});
		assert_eq!(emitter.subscriber_count(), 1);
		subscription.unsubscribe();
		assert_eq!(emitter.subscriber_count(), 0);
	}

	#[test]
	fn test_panicking_subscriber_does_not_stop_fan_out() {
		let emitter: Emitter<u32> = Emitter::new();
		let reached = Arc::new(AtomicUsize::new(0));

		let panicking = emitter.subscribe(|_| panic!("subscriber failure"));
		let counting = {
			let reached = Arc::clone(&reached);
			emitter.subscribe(move |_| {
				reached.fetch_add(1, Ordering::SeqCst);
			})
		};

		emitter.fire(&1);
		assert_eq!(reached.load(Ordering::SeqCst), 1);

		drop(panicking);
		drop(counting);
	}

	#[test]
	fn test_none_subscription_is_inert() {
		let subscription = Subscription::none();
		subscription.unsubscribe();
	}
}
