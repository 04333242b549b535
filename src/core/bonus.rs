use crate::domain::model::{Employee, Role, BASE_BONUS_RATE};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_rate;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub const MANAGER_BONUS_RATE: f64 = 0.2;
pub const DEVELOPER_BONUS_RATE: f64 = 0.15;

pub trait BonusPolicy: Send + Sync {
    fn name(&self) -> &str;
    fn bonus(&self, employee: &Employee) -> f64;
}

/// Pays a fixed fraction of the salary.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedRatePolicy {
    name: String,
    rate: f64,
}

impl FixedRatePolicy {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl BonusPolicy for FixedRatePolicy {
    fn name(&self) -> &str {
        &self.name
    }

    fn bonus(&self, employee: &Employee) -> f64 {
        employee.salary * self.rate
    }
}

/// Picks a bonus policy by role. New roles are supported by registering a
/// policy for them; existing policies are never edited to make room.
#[derive(Clone)]
pub struct BonusCalculator {
    policies: HashMap<Role, Arc<dyn BonusPolicy>>,
    fallback: Arc<dyn BonusPolicy>,
}

impl BonusCalculator {
    pub fn new() -> Self {
        Self::empty()
            .with_policy(
                Role::Manager,
                FixedRatePolicy::new("manager", MANAGER_BONUS_RATE),
            )
            .with_policy(
                Role::Developer,
                FixedRatePolicy::new("developer", DEVELOPER_BONUS_RATE),
            )
    }

    /// No role-specific policies, only the base rate.
    pub fn empty() -> Self {
        Self {
            policies: HashMap::new(),
            fallback: Arc::new(FixedRatePolicy::new("base", BASE_BONUS_RATE)),
        }
    }

    /// Built-in rates overlaid with whatever the configuration sets.
    /// Every configured rate must lie within `[0, 1]`.
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let default_rate = config.default_bonus_rate();
        validate_rate("bonus.default_rate", default_rate)?;

        let mut calculator =
            Self::new().with_fallback(FixedRatePolicy::new("base", default_rate));
        for (role, rate) in config.role_rates() {
            validate_rate(&format!("bonus.roles.{}", role), rate)?;
            tracing::debug!("Configured bonus rate for {}: {}", role, rate);
            let name = role.to_string();
            calculator.register(role, FixedRatePolicy::new(name, rate));
        }
        Ok(calculator)
    }

    pub fn with_policy<P: BonusPolicy + 'static>(mut self, role: Role, policy: P) -> Self {
        self.register(role, policy);
        self
    }

    pub fn with_fallback<P: BonusPolicy + 'static>(mut self, policy: P) -> Self {
        self.fallback = Arc::new(policy);
        self
    }

    /// Replaces any policy already registered for `role`.
    pub fn register<P: BonusPolicy + 'static>(&mut self, role: Role, policy: P) {
        self.policies.insert(role, Arc::new(policy));
    }

    pub fn policy_for(&self, role: &Role) -> &dyn BonusPolicy {
        self.policies
            .get(role)
            .map(|p| p.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    pub fn calculate_bonus(&self, employee: &Employee) -> f64 {
        self.policy_for(&employee.role).bonus(employee)
    }
}

impl Default for BonusCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BonusCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut roles: Vec<_> = self
            .policies
            .iter()
            .map(|(role, policy)| (role.as_str(), policy.name()))
            .collect();
        roles.sort();
        f.debug_struct("BonusCalculator")
            .field("policies", &roles)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}
