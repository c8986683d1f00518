//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
use chrono::{DateTime, FixedOffset};

use crate::enums::{ContributorInsightsAction, ContributorInsightsStatus};
use crate::types::ValueObject;
use crate::wire_enum::SymbolicField;

/// Input of the UpdateContributorInsights operation.
///
/// The action is strictly validated when the request is decoded: the
/// service only accepts `ENABLE` and `DISABLE`.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct UpdateContributorInsightsRequest {
    table_name: Option<String>,
    index_name: Option<String>,
    #[model(strict)]
    contributor_insights_action: Option<SymbolicField<ContributorInsightsAction>>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct UpdateContributorInsightsResult {
    table_name: Option<String>,
    index_name: Option<String>,
    contributor_insights_status: Option<SymbolicField<ContributorInsightsStatus>>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct DescribeContributorInsightsRequest {
    table_name: Option<String>,
    index_name: Option<String>,
}

/// Why contributor insights could not be turned on.
#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct FailureException {
    exception_name: Option<String>,
    exception_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, ValueObject)]
pub struct DescribeContributorInsightsResult {
    table_name: Option<String>,
    index_name: Option<String>,
    contributor_insights_rule_list: Option<Vec<String>>,
    contributor_insights_status: Option<SymbolicField<ContributorInsightsStatus>>,
    last_update_date_time: Option<DateTime<FixedOffset>>,
    failure_exception: Option<FailureException>,
}
