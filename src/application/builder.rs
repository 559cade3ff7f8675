//! Model input builder.
//!
//! Turns an [`OptimizeRequest`] into a validated [`ModelInput`]: parses the
//! `"<function>|<role>"` headcount keys, merges policy defaults with request
//! weights and fills every missing entry (alpha 0, penalty 1, headcount 0).
//! Any inconsistency is reported as an [`InputError`] before a model exists.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::input::DEFAULT_REMOVAL_PENALTY;
use crate::domain::{
    FunctionName, HeadcountKey, HeadcountMatrix, InputError, ModelInput, RoleName,
    WorkforcePolicy,
};
use crate::port::inbound::optimize::OptimizeRequest;

/// Builds canonical model inputs under a fixed workforce policy.
#[derive(Debug, Clone, Default)]
pub struct ModelInputBuilder {
    policy: WorkforcePolicy,
}

impl ModelInputBuilder {
    #[must_use]
    pub const fn new(policy: WorkforcePolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub const fn policy(&self) -> &WorkforcePolicy {
        &self.policy
    }

    /// Validate a request and produce the canonical model input.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] encountered. Checks run in order:
    /// functions, roles, capacity, workload, headcount, role shares, penalties,
    /// then the per-function headcount totals and the total removal cost.
    pub fn build(&self, request: &OptimizeRequest) -> Result<ModelInput, InputError> {
        let functions = declared_functions(&request.functions)?;
        let roles = self.declared_roles(request.roles.as_deref())?;

        if request.capacity <= Decimal::ZERO {
            return Err(InputError::NonPositiveCapacity {
                capacity: request.capacity,
            });
        }

        let workload = workload_map(request, &functions)?;
        let headcount = headcount_matrix(request, &functions, &roles)?;
        let alpha = self.role_shares(request, &roles)?;
        let penalty = self.removal_penalties(request, &roles)?;
        check_totals(&functions, &roles, &headcount, &penalty)?;

        debug!(
            functions = functions.len(),
            roles = roles.len(),
            headcount_entries = headcount.len(),
            "Model input built"
        );

        Ok(ModelInput {
            functions,
            roles,
            workload,
            capacity: request.capacity,
            headcount,
            alpha,
            penalty,
        })
    }

    fn declared_roles(&self, requested: Option<&[String]>) -> Result<Vec<RoleName>, InputError> {
        let roles: Vec<RoleName> = match requested {
            Some(roles) => roles.iter().map(|role| RoleName::new(role.as_str())).collect(),
            None => self.policy.roles.clone(),
        };
        if roles.is_empty() {
            return Err(InputError::EmptyRoles);
        }

        let mut seen = HashSet::with_capacity(roles.len());
        for role in &roles {
            if !seen.insert(role) {
                return Err(InputError::DuplicateRole {
                    role: role.to_string(),
                });
            }
        }
        Ok(roles)
    }

    fn role_shares(
        &self,
        request: &OptimizeRequest,
        roles: &[RoleName],
    ) -> Result<HashMap<RoleName, Decimal>, InputError> {
        let merged = self.policy.merged_alpha(request.alpha.as_ref());
        warn_undeclared("alpha", merged.keys(), roles);

        roles
            .iter()
            .map(|role| {
                let share = merged.get(role).copied().unwrap_or(Decimal::ZERO);
                if share < Decimal::ZERO || share >= Decimal::ONE {
                    return Err(InputError::InvalidRoleShare {
                        role: role.to_string(),
                        share,
                    });
                }
                Ok((role.clone(), share))
            })
            .collect()
    }

    fn removal_penalties(
        &self,
        request: &OptimizeRequest,
        roles: &[RoleName],
    ) -> Result<HashMap<RoleName, Decimal>, InputError> {
        let merged = self.policy.merged_penalty(request.penalty.as_ref());
        warn_undeclared("penalty", merged.keys(), roles);

        roles
            .iter()
            .map(|role| {
                let penalty = merged
                    .get(role)
                    .copied()
                    .unwrap_or(DEFAULT_REMOVAL_PENALTY);
                if penalty <= Decimal::ZERO {
                    return Err(InputError::NonPositivePenalty {
                        role: role.to_string(),
                        penalty,
                    });
                }
                Ok((role.clone(), penalty))
            })
            .collect()
    }
}

fn declared_functions(names: &[String]) -> Result<Vec<FunctionName>, InputError> {
    if names.is_empty() {
        return Err(InputError::EmptyFunctions);
    }

    let mut seen = HashSet::with_capacity(names.len());
    let mut functions = Vec::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(InputError::DuplicateFunction {
                function: name.clone(),
            });
        }
        functions.push(FunctionName::new(name.as_str()));
    }
    Ok(functions)
}

fn workload_map(
    request: &OptimizeRequest,
    functions: &[FunctionName],
) -> Result<HashMap<FunctionName, Decimal>, InputError> {
    let mut workload = HashMap::with_capacity(functions.len());
    for (name, hours) in &request.workload {
        let function = FunctionName::new(name.as_str());
        if !functions.contains(&function) {
            return Err(InputError::UnknownWorkloadFunction {
                function: name.clone(),
            });
        }
        if *hours < Decimal::ZERO {
            return Err(InputError::NegativeWorkload {
                function: name.clone(),
                hours: *hours,
            });
        }
        workload.insert(function, *hours);
    }

    if let Some(missing) = functions.iter().find(|f| !workload.contains_key(*f)) {
        return Err(InputError::MissingWorkload {
            function: missing.to_string(),
        });
    }
    Ok(workload)
}

fn headcount_matrix(
    request: &OptimizeRequest,
    functions: &[FunctionName],
    roles: &[RoleName],
) -> Result<HeadcountMatrix, InputError> {
    let mut matrix = HeadcountMatrix::new();
    for (raw, count) in &request.headcount {
        let key = HeadcountKey::parse(raw)?;
        if !functions.contains(key.function()) {
            return Err(InputError::UnknownHeadcountFunction {
                key: raw.clone(),
                function: key.function().to_string(),
            });
        }
        if !roles.contains(key.role()) {
            return Err(InputError::UnknownHeadcountRole {
                key: raw.clone(),
                role: key.role().to_string(),
            });
        }
        if *count < 0 {
            return Err(InputError::NegativeHeadcount {
                key: raw.clone(),
                count: *count,
            });
        }
        let count = u32::try_from(*count).map_err(|_| InputError::HeadcountOutOfRange {
            key: raw.clone(),
            count: *count,
        })?;
        matrix.set(key, count);
    }
    Ok(matrix)
}

/// Reject inputs whose aggregates do not fit the model's numeric domain.
fn check_totals(
    functions: &[FunctionName],
    roles: &[RoleName],
    headcount: &HeadcountMatrix,
    penalty: &HashMap<RoleName, Decimal>,
) -> Result<(), InputError> {
    let mut removal_cost = Decimal::ZERO;
    for function in functions {
        let mut total = 0u32;
        for role in roles {
            let count = headcount.get(function, role);
            total = total
                .checked_add(count)
                .ok_or_else(|| InputError::HeadcountTotalOverflow {
                    function: function.to_string(),
                })?;

            let weight = penalty.get(role).copied().unwrap_or(DEFAULT_REMOVAL_PENALTY);
            removal_cost = weight
                .checked_mul(Decimal::from(count))
                .and_then(|cost| removal_cost.checked_add(cost))
                .ok_or_else(|| InputError::RemovalCostOverflow {
                    function: function.to_string(),
                    role: role.to_string(),
                })?;
        }
    }
    Ok(())
}

fn warn_undeclared<'a>(
    map: &'static str,
    keys: impl Iterator<Item = &'a RoleName>,
    roles: &[RoleName],
) {
    for role in keys.filter(|role| !roles.contains(role)) {
        warn!(map, role = %role, "Ignoring weight for undeclared role");
    }
}
