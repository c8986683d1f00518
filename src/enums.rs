//
// Copyright (c) 2024, 2025 Oracle and/or its affiliates. All rights reserved.
//
// Licensed under the Universal Permissive License v 1.0 as shown at
//  https://oss.oracle.com/licenses/upl/
//
//! Vocabularies of the DynamoDB API.
//!
//! Value objects store these as [`SymbolicField`](crate::SymbolicField) so that
//! values introduced by the service after this client was built are kept.

crate::wire_enum! {
    /// Comparison used by a [`Condition`](crate::Condition).
    pub enum ComparisonOperator {
        Eq = "EQ",
        Ne = "NE",
        In = "IN",
        Le = "LE",
        Lt = "LT",
        Ge = "GE",
        Gt = "GT",
        Between = "BETWEEN",
        NotNull = "NOT_NULL",
        Null = "NULL",
        Contains = "CONTAINS",
        NotContains = "NOT_CONTAINS",
        BeginsWith = "BEGINS_WITH",
    }
}

crate::wire_enum! {
    /// How multiple legacy conditions are combined.
    pub enum ConditionalOperator {
        And = "AND",
        Or = "OR",
    }
}

crate::wire_enum! {
    /// Attributes returned by a query or scan.
    pub enum Select {
        AllAttributes = "ALL_ATTRIBUTES",
        AllProjectedAttributes = "ALL_PROJECTED_ATTRIBUTES",
        SpecificAttributes = "SPECIFIC_ATTRIBUTES",
        Count = "COUNT",
    }
}

crate::wire_enum! {
    /// Level of detail of the consumed capacity returned with a response.
    pub enum ReturnConsumedCapacity {
        Indexes = "INDEXES",
        Total = "TOTAL",
        None = "NONE",
    }
}

crate::wire_enum! {
    /// Item attributes returned by a write.
    pub enum ReturnValue {
        None = "NONE",
        AllOld = "ALL_OLD",
        UpdatedOld = "UPDATED_OLD",
        AllNew = "ALL_NEW",
        UpdatedNew = "UPDATED_NEW",
    }
}

crate::wire_enum! {
    pub enum ReturnItemCollectionMetrics {
        Size = "SIZE",
        None = "NONE",
    }
}

crate::wire_enum! {
    pub enum TableStatus {
        Creating = "CREATING",
        Updating = "UPDATING",
        Deleting = "DELETING",
        Active = "ACTIVE",
    }
}

crate::wire_enum! {
    pub enum IndexStatus {
        Creating = "CREATING",
        Updating = "UPDATING",
        Deleting = "DELETING",
        Active = "ACTIVE",
    }
}

crate::wire_enum! {
    /// Role of a key attribute.
    pub enum KeyType {
        /// Partition key.
        Hash = "HASH",
        /// Sort key.
        Range = "RANGE",
    }
}

crate::wire_enum! {
    /// Type of a key attribute: string, number or binary.
    pub enum ScalarAttributeType {
        S = "S",
        N = "N",
        B = "B",
    }
}

crate::wire_enum! {
    /// Attributes copied into a secondary index.
    pub enum ProjectionType {
        All = "ALL",
        KeysOnly = "KEYS_ONLY",
        Include = "INCLUDE",
    }
}

crate::wire_enum! {
    /// Item images written to a table's stream.
    pub enum StreamViewType {
        NewImage = "NEW_IMAGE",
        OldImage = "OLD_IMAGE",
        NewAndOldImages = "NEW_AND_OLD_IMAGES",
        KeysOnly = "KEYS_ONLY",
    }
}

crate::wire_enum! {
    /// State of server-side encryption for a table.
    pub enum SSEStatus {
        Enabling = "ENABLING",
        Enabled = "ENABLED",
        Disabling = "DISABLING",
        Disabled = "DISABLED",
        Updating = "UPDATING",
    }
}

crate::wire_enum! {
    pub enum SSEType {
        Aes256 = "AES256",
        Kms = "KMS",
    }
}

crate::wire_enum! {
    /// Action of a legacy attribute update.
    pub enum AttributeAction {
        Add = "ADD",
        Put = "PUT",
        Delete = "DELETE",
    }
}

crate::wire_enum! {
    /// Requested change to a table's contributor insights.
    pub enum ContributorInsightsAction {
        Enable = "ENABLE",
        Disable = "DISABLE",
    }
}

crate::wire_enum! {
    /// Contributor insights state of a table or index.
    pub enum ContributorInsightsStatus {
        Enabling = "ENABLING",
        Enabled = "ENABLED",
        Disabling = "DISABLING",
        Disabled = "DISABLED",
        Failed = "FAILED",
    }
}
