//! Request builders and canonical scenarios.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::port::inbound::optimize::OptimizeRequest;

/// Fluent builder for [`OptimizeRequest`].
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    request: OptimizeRequest,
}

impl RequestBuilder {
    /// Start an empty request with capacity 6.5 hours per person.
    #[must_use]
    pub fn new() -> Self {
        Self {
            request: OptimizeRequest {
                capacity: dec!(6.5),
                ..OptimizeRequest::default()
            },
        }
    }

    /// Declare a function with its workload.
    #[must_use]
    pub fn function(mut self, name: &str, workload: Decimal) -> Self {
        self.request.functions.push(name.to_string());
        self.request.workload.insert(name.to_string(), workload);
        self
    }

    /// Declare a role.
    #[must_use]
    pub fn role(mut self, name: &str) -> Self {
        self.request
            .roles
            .get_or_insert_with(Vec::new)
            .push(name.to_string());
        self
    }

    #[must_use]
    pub fn capacity(mut self, hours: Decimal) -> Self {
        self.request.capacity = hours;
        self
    }

    /// Set current headcount of a (function, role) pair.
    #[must_use]
    pub fn headcount(mut self, function: &str, role: &str, count: i64) -> Self {
        self.request
            .headcount
            .insert(format!("{function}|{role}"), count);
        self
    }

    #[must_use]
    pub fn alpha(mut self, role: &str, share: Decimal) -> Self {
        self.request
            .alpha
            .get_or_insert_with(BTreeMap::new)
            .insert(role.to_string(), share);
        self
    }

    #[must_use]
    pub fn penalty(mut self, role: &str, weight: Decimal) -> Self {
        self.request
            .penalty
            .get_or_insert_with(BTreeMap::new)
            .insert(role.to_string(), weight);
        self
    }

    #[must_use]
    pub fn build(self) -> OptimizeRequest {
        self.request
    }
}

/// One function "Ops", Manager 2 / Officer 3, 20 hours, Manager penalty 3.
#[must_use]
pub fn ops_scenario() -> OptimizeRequest {
    RequestBuilder::new()
        .function("Ops", dec!(20))
        .role("Manager")
        .role("Officer")
        .headcount("Ops", "Manager", 2)
        .headcount("Ops", "Officer", 3)
        .penalty("Manager", dec!(3))
        .penalty("Officer", dec!(1))
        .build()
}

/// One manager facing 100 hours of workload: shortage is unavoidable.
#[must_use]
pub fn understaffed_scenario() -> OptimizeRequest {
    RequestBuilder::new()
        .function("Ops", dec!(100))
        .role("Manager")
        .headcount("Ops", "Manager", 1)
        .build()
}

/// Ops with a 50% manager floor: two managers cap the function at four
/// people, which exactly covers 26 hours.
#[must_use]
pub fn hierarchy_scenario() -> OptimizeRequest {
    RequestBuilder::new()
        .function("Ops", dec!(26))
        .role("Manager")
        .role("Officer")
        .headcount("Ops", "Manager", 2)
        .headcount("Ops", "Officer", 5)
        .alpha("Manager", dec!(0.5))
        .penalty("Manager", dec!(3))
        .penalty("Officer", dec!(1))
        .build()
}
