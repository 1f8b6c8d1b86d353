//! Monthly-expense store

use std::rc::Rc;

use truckbook_domain::repository::{KeyValueStore, MONTHLY_EXPENSES_KEY};
use truckbook_domain::service::monthly_expense_total;
use truckbook_types::{MonthlyExpenseRecord, NewMonthlyExpense};

use crate::channel::SubscriptionId;
use crate::collection::{LoadStatus, RecordCollection};
use crate::id::generate_id;

/// Authoritative collection of monthly expenses
///
/// Truck lookups here use exact equality, unlike [`TripStore`](crate::TripStore).
/// Several records for the same truck and period are allowed.
#[derive(Debug)]
pub struct MonthlyExpenseStore {
    expenses: RecordCollection<MonthlyExpenseRecord>,
}

impl MonthlyExpenseStore {
    /// Open the store, starting empty if stored expenses are missing or unreadable
    pub fn open(backend: Rc<dyn KeyValueStore>) -> Self {
        Self {
            expenses: RecordCollection::open(backend, MONTHLY_EXPENSES_KEY),
        }
    }

    /// Record a monthly expense; the total is derived from the three amounts
    pub fn add(&mut self, input: NewMonthlyExpense) -> MonthlyExpenseRecord {
        let expense = MonthlyExpenseRecord::from_input(generate_id(), input);
        self.expenses.insert(expense.clone());
        expense
    }

    /// All monthly expenses in insertion order
    pub fn all(&self) -> &[MonthlyExpenseRecord] {
        self.expenses.records()
    }

    pub fn get(&self, id: &str) -> Option<&MonthlyExpenseRecord> {
        self.expenses.get(id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn find_by_truck_number(&self, truck_number: &str) -> Vec<&MonthlyExpenseRecord> {
        self.all()
            .iter()
            .filter(|e| e.truck_number == truck_number)
            .collect()
    }

    /// Sum of monthly totals for exactly `truck_number`
    pub fn total_for_truck(&self, truck_number: &str) -> f64 {
        monthly_expense_total(self.find_by_truck_number(truck_number))
    }

    /// Remove an expense by id. Unknown ids are a no-op; returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        self.expenses.remove(id)
    }

    /// Observe the expense collection, starting with the current snapshot
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Vec<MonthlyExpenseRecord>) + 'static,
    {
        self.expenses.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.expenses.unsubscribe(id)
    }

    pub fn load_status(&self) -> &LoadStatus {
        self.expenses.load_status()
    }
}
