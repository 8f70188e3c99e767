/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Embedded FIX 4.x baseline dictionary.
//!
//! Covers the session header/trailer, the common order and execution fields,
//! and the repeating groups a trading-traffic translator sees most:
//! NoAllocs (78) and NoPartyIDs (453) with nested NoPartySubIDs (802).
//! Deployments with vendor tags extend this table before installing it.

use crate::schema::{Dictionary, FieldDef, FieldType, GroupDef};

/// (tag, name, type) table for the baseline fields.
const BASE_FIELDS: &[(u32, &str, FieldType)] = &[
    // Header and trailer
    (8, "BeginString", FieldType::String),
    (9, "BodyLength", FieldType::Length),
    (10, "CheckSum", FieldType::String),
    (34, "MsgSeqNum", FieldType::SeqNum),
    (35, "MsgType", FieldType::String),
    (43, "PossDupFlag", FieldType::Boolean),
    (49, "SenderCompID", FieldType::String),
    (52, "SendingTime", FieldType::UtcTimestamp),
    (56, "TargetCompID", FieldType::String),
    (97, "PossResend", FieldType::Boolean),
    (115, "OnBehalfOfCompID", FieldType::String),
    (128, "DeliverToCompID", FieldType::String),
    // Order and execution
    (1, "Account", FieldType::String),
    (6, "AvgPx", FieldType::Price),
    (11, "ClOrdID", FieldType::String),
    (12, "Commission", FieldType::Amt),
    (13, "CommType", FieldType::Char),
    (14, "CumQty", FieldType::Qty),
    (15, "Currency", FieldType::Currency),
    (17, "ExecID", FieldType::String),
    (18, "ExecInst", FieldType::String),
    (20, "ExecTransType", FieldType::Char),
    (21, "HandlInst", FieldType::Char),
    (22, "SecurityIDSource", FieldType::String),
    (31, "LastPx", FieldType::Price),
    (32, "LastShares", FieldType::Qty),
    (37, "OrderID", FieldType::String),
    (38, "OrderQty", FieldType::Qty),
    (39, "OrdStatus", FieldType::Char),
    (40, "OrdType", FieldType::Char),
    (41, "OrigClOrdID", FieldType::String),
    (44, "Price", FieldType::Price),
    (48, "SecurityID", FieldType::String),
    (54, "Side", FieldType::Char),
    (55, "Symbol", FieldType::String),
    (58, "Text", FieldType::String),
    (59, "TimeInForce", FieldType::Char),
    (60, "TransactTime", FieldType::UtcTimestamp),
    (64, "SettlDate", FieldType::UtcDateOnly),
    (75, "TradeDate", FieldType::UtcDateOnly),
    (76, "ExecBroker", FieldType::String),
    (99, "StopPx", FieldType::Price),
    (100, "ExDestination", FieldType::Exchange),
    (103, "OrdRejReason", FieldType::Int),
    (109, "ClientID", FieldType::String),
    (150, "ExecType", FieldType::Char),
    (151, "LeavesQty", FieldType::Qty),
    (167, "SecurityType", FieldType::String),
    (207, "SecurityExchange", FieldType::Exchange),
    // Group counts and members
    (78, "NoAllocs", FieldType::NumInGroup),
    (79, "AllocAccount", FieldType::String),
    (80, "AllocShares", FieldType::Qty),
    (447, "PartyIDSource", FieldType::Char),
    (448, "PartyID", FieldType::String),
    (452, "PartyRole", FieldType::Int),
    (453, "NoPartyIDs", FieldType::NumInGroup),
    (523, "PartySubID", FieldType::String),
    (802, "NoPartySubIDs", FieldType::NumInGroup),
    (803, "PartySubIDType", FieldType::Int),
];

/// (tag, values) table for the baseline enum descriptions, QuickFIX naming.
const BASE_ENUMS: &[(u32, &[(&str, &str)])] = &[
    (
        20,
        &[("0", "NEW"), ("1", "CANCEL"), ("2", "CORRECT"), ("3", "STATUS")],
    ),
    (
        21,
        &[
            ("1", "AUTOMATED_EXECUTION_ORDER_PRIVATE"),
            ("2", "AUTOMATED_EXECUTION_ORDER_PUBLIC"),
            ("3", "MANUAL_ORDER"),
        ],
    ),
    (
        39,
        &[
            ("0", "NEW"),
            ("1", "PARTIALLY_FILLED"),
            ("2", "FILLED"),
            ("3", "DONE_FOR_DAY"),
            ("4", "CANCELED"),
            ("5", "REPLACED"),
            ("6", "PENDING_CANCEL"),
            ("7", "STOPPED"),
            ("8", "REJECTED"),
            ("9", "SUSPENDED"),
            ("A", "PENDING_NEW"),
            ("C", "EXPIRED"),
            ("E", "PENDING_REPLACE"),
        ],
    ),
    (
        40,
        &[
            ("1", "MARKET"),
            ("2", "LIMIT"),
            ("3", "STOP"),
            ("4", "STOP_LIMIT"),
            ("P", "PEGGED"),
        ],
    ),
    (
        54,
        &[
            ("1", "BUY"),
            ("2", "SELL"),
            ("3", "BUY_MINUS"),
            ("4", "SELL_MINUS"),
            ("5", "SELL_SHORT"),
            ("6", "SELL_SHORT_EXEMPT"),
            ("7", "UNDISCLOSED"),
            ("8", "CROSS"),
        ],
    ),
    (
        59,
        &[
            ("0", "DAY"),
            ("1", "GOOD_TILL_CANCEL"),
            ("2", "AT_THE_OPENING"),
            ("3", "IMMEDIATE_OR_CANCEL"),
            ("4", "FILL_OR_KILL"),
            ("6", "GOOD_TILL_DATE"),
        ],
    ),
    (
        150,
        &[
            ("0", "NEW"),
            ("1", "PARTIAL_FILL"),
            ("2", "FILL"),
            ("3", "DONE_FOR_DAY"),
            ("4", "CANCELED"),
            ("5", "REPLACED"),
            ("8", "REJECTED"),
            ("F", "TRADE"),
        ],
    ),
];

/// (value, name) table for tag 35.
const BASE_MSG_TYPES: &[(&str, &str)] = &[
    ("0", "Heartbeat"),
    ("1", "TestRequest"),
    ("2", "ResendRequest"),
    ("3", "Reject"),
    ("4", "SequenceReset"),
    ("5", "Logout"),
    ("6", "IndicationOfInterest"),
    ("7", "Advertisement"),
    ("8", "ExecutionReport"),
    ("9", "OrderCancelReject"),
    ("A", "Logon"),
    ("B", "News"),
    ("D", "NewOrderSingle"),
    ("E", "NewOrderList"),
    ("F", "OrderCancelRequest"),
    ("G", "OrderCancelReplaceRequest"),
    ("H", "OrderStatusRequest"),
    ("J", "AllocationInstruction"),
    ("V", "MarketDataRequest"),
    ("W", "MarketDataSnapshotFullRefresh"),
    ("X", "MarketDataIncrementalRefresh"),
    ("j", "BusinessMessageReject"),
];

impl Dictionary {
    /// Builds the embedded FIX 4.x baseline dictionary.
    #[must_use]
    pub fn base() -> Self {
        let mut dict = Self::new();

        for &(tag, name, field_type) in BASE_FIELDS {
            dict.add_field(FieldDef::new(tag, name, field_type));
        }

        for &(tag, values) in BASE_ENUMS {
            for &(value, description) in values {
                dict.add_enum(tag, value, description);
            }
        }

        for &(value, name) in BASE_MSG_TYPES {
            dict.add_msg_type(value, name);
        }

        dict.add_group(GroupDef::new(78, "NoAllocs", vec![79, 80]));
        dict.add_group(
            GroupDef::new(453, "NoPartyIDs", vec![448, 447, 452])
                .with_nested(GroupDef::new(802, "NoPartySubIDs", vec![523, 803])),
        );

        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_covers_envelope() {
        let dict = Dictionary::base();
        assert_eq!(dict.field_name(8), Some("BeginString"));
        assert_eq!(dict.field_name(9), Some("BodyLength"));
        assert_eq!(dict.field_name(10), Some("CheckSum"));
        assert_eq!(dict.field_name(35), Some("MsgType"));
    }

    #[test]
    fn test_base_groups() {
        let dict = Dictionary::base();
        assert!(dict.is_group_leader(78));
        assert!(dict.is_group_leader(453));
        assert!(dict.is_group_leader(802));
        assert_eq!(dict.group(78).unwrap().delimiter_tag, 79);
    }

    #[test]
    fn test_base_enums() {
        let dict = Dictionary::base();
        assert_eq!(dict.enum_desc(54, "1"), Some("BUY"));
        assert_eq!(dict.enum_desc(39, "2"), Some("FILLED"));
        assert_eq!(dict.enum_desc(40, "2"), Some("LIMIT"));
        // Free-form fields carry no enum table.
        assert_eq!(dict.enum_desc(55, "AAPL"), None);
    }

    #[test]
    fn test_base_msg_types() {
        let dict = Dictionary::base();
        assert_eq!(dict.msg_type_name("0"), Some("Heartbeat"));
        assert_eq!(dict.msg_type_name("D"), Some("NewOrderSingle"));
        assert_eq!(dict.msg_type_name("8"), Some("ExecutionReport"));
    }

    #[test]
    fn test_base_extensible() {
        let mut dict = Dictionary::base();
        dict.add_field(FieldDef::new(9999, "CustomTag", FieldType::String));
        assert_eq!(dict.field_name(9999), Some("CustomTag"));
        // Baseline stays intact.
        assert_eq!(dict.field_name(55), Some("Symbol"));
    }
}
