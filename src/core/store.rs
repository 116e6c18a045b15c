//! In-memory ledger store
//!
//! `WalletStore` owns the three entity collections (accounts, payments,
//! favorites) and the monotonic account ID counter. It is an explicit object
//! passed to the I/O and aggregation layers; there is no ambient singleton.
//!
//! # Mutation discipline
//!
//! All mutations run through validated operations that either commit fully or
//! leave the store untouched. The aggregation layer only ever reads the
//! payment slice; the dump importer only appends.

use crate::types::{
    Account, AccountId, Favorite, Money, Payment, PaymentStatus, WalletError,
};
use uuid::Uuid;

/// The in-memory ledger
#[derive(Debug, Default)]
pub struct WalletStore {
    next_account_id: AccountId,
    accounts: Vec<Account>,
    payments: Vec<Payment>,
    favorites: Vec<Favorite>,
}

impl WalletStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new account for `phone`
    ///
    /// Assigns the next monotonic ID and a zero balance. Fails with
    /// [`WalletError::PhoneRegistered`] if the phone is already taken.
    pub fn register_account(&mut self, phone: &str) -> Result<Account, WalletError> {
        if self.accounts.iter().any(|account| account.phone == phone) {
            return Err(WalletError::PhoneRegistered);
        }

        self.next_account_id += 1;
        let account = Account {
            id: self.next_account_id,
            phone: phone.to_owned(),
            balance: 0,
        };
        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Credit `amount` to an account
    ///
    /// The amount must be strictly positive and the account must exist.
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<(), WalletError> {
        if amount <= 0 {
            return Err(WalletError::AmountMustBePositive);
        }

        let account = self.find_account_mut(account_id)?;
        account.balance += amount;
        Ok(())
    }

    /// Debit an account and record a new payment
    ///
    /// The payment gets a fresh UUID and starts in
    /// [`PaymentStatus::InProgress`]. Fails without touching the store if the
    /// amount is not positive, the account does not exist, or the balance is
    /// insufficient.
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: &str,
    ) -> Result<Payment, WalletError> {
        if amount <= 0 {
            return Err(WalletError::AmountMustBePositive);
        }

        let account = self.find_account_mut(account_id)?;
        if account.balance < amount {
            return Err(WalletError::NotEnoughBalance);
        }
        account.balance -= amount;

        let payment = Payment {
            id: Uuid::new_v4().to_string(),
            account_id,
            amount,
            category: category.to_owned(),
            status: PaymentStatus::InProgress,
        };
        self.payments.push(payment.clone());
        Ok(payment)
    }

    /// Look up an account by ID
    pub fn find_account(&self, account_id: AccountId) -> Result<&Account, WalletError> {
        self.accounts
            .iter()
            .find(|account| account.id == account_id)
            .ok_or(WalletError::AccountNotFound)
    }

    fn find_account_mut(&mut self, account_id: AccountId) -> Result<&mut Account, WalletError> {
        self.accounts
            .iter_mut()
            .find(|account| account.id == account_id)
            .ok_or(WalletError::AccountNotFound)
    }

    /// Look up a payment by ID
    pub fn find_payment(&self, payment_id: &str) -> Result<&Payment, WalletError> {
        self.payments
            .iter()
            .find(|payment| payment.id == payment_id)
            .ok_or(WalletError::PaymentNotFound)
    }

    fn find_payment_mut(&mut self, payment_id: &str) -> Result<&mut Payment, WalletError> {
        self.payments
            .iter_mut()
            .find(|payment| payment.id == payment_id)
            .ok_or(WalletError::PaymentNotFound)
    }

    /// Look up a favorite by ID
    pub fn find_favorite(&self, favorite_id: &str) -> Result<&Favorite, WalletError> {
        self.favorites
            .iter()
            .find(|favorite| favorite.id == favorite_id)
            .ok_or(WalletError::FavoriteNotFound)
    }

    /// Reject a payment, refunding its amount
    ///
    /// The amount flows back to the owning account; the payment keeps its ID
    /// but its amount is forced to zero and its status to
    /// [`PaymentStatus::Fail`].
    pub fn reject(&mut self, payment_id: &str) -> Result<(), WalletError> {
        let (account_id, amount) = {
            let payment = self.find_payment(payment_id)?;
            (payment.account_id, payment.amount)
        };

        self.find_account_mut(account_id)?.balance += amount;

        let payment = self.find_payment_mut(payment_id)?;
        payment.amount = 0;
        payment.status = PaymentStatus::Fail;
        Ok(())
    }

    /// Repeat an existing payment with the same parameters
    ///
    /// Issues a brand-new payment (new ID, fresh validation) against the
    /// original account, amount, and category.
    pub fn repeat(&mut self, payment_id: &str) -> Result<Payment, WalletError> {
        let source = self.find_payment(payment_id)?.clone();
        self.pay(source.account_id, source.amount, &source.category)
    }

    /// Derive a favorite template from an existing payment
    ///
    /// The favorite is independent of the source payment afterwards.
    pub fn favorite_payment(
        &mut self,
        payment_id: &str,
        name: &str,
    ) -> Result<Favorite, WalletError> {
        let payment = self.find_payment(payment_id)?;
        let favorite = Favorite {
            id: Uuid::new_v4().to_string(),
            account_id: payment.account_id,
            name: name.to_owned(),
            amount: payment.amount,
            category: payment.category.clone(),
        };
        self.favorites.push(favorite.clone());
        Ok(favorite)
    }

    /// Issue a new payment from a favorite template
    pub fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<Payment, WalletError> {
        let favorite = self.find_favorite(favorite_id)?.clone();
        self.pay(favorite.account_id, favorite.amount, &favorite.category)
    }

    /// Owned copies of one account's payments, in insertion order
    pub fn export_account_history(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Payment>, WalletError> {
        self.find_account(account_id)?;
        Ok(self
            .payments
            .iter()
            .filter(|payment| payment.account_id == account_id)
            .cloned()
            .collect())
    }

    /// All accounts, in registration order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All payments, in creation order
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// All favorites, in creation order
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Append an account restored verbatim from a dump
    ///
    /// Keeps the ID counter ahead of every restored ID so later
    /// registrations stay unique.
    pub fn restore_account(&mut self, account: Account) {
        self.next_account_id = self.next_account_id.max(account.id);
        self.accounts.push(account);
    }

    /// Append a payment restored verbatim from a dump
    pub fn restore_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// Append a favorite restored verbatim from a dump
    pub fn restore_favorite(&mut self, favorite: Favorite) {
        self.favorites.push(favorite);
    }
}
