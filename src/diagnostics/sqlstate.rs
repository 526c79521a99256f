//! SQLSTATE registry: error code -> condition name, class code -> class
//! title, as listed in the PostgreSQL error codes appendix.

/// A known SQLSTATE code and its condition name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlStateCondition {
    pub code: &'static str,
    pub condition: &'static str,
}

impl SqlStateCondition {
    pub const fn new(code: &'static str, condition: &'static str) -> Self {
        Self { code, condition }
    }

    /// First two characters of the code.
    pub fn class_code(&self) -> &'static str {
        &self.code[..2]
    }

    pub fn class_title(&self) -> Option<&'static str> {
        lookup_class(self.class_code())
    }
}

/// Class code -> class title.
pub const SQLSTATE_CLASSES: &[(&str, &str)] = &[
    ("00", "Successful Completion"),
    ("01", "Warning"),
    ("02", "No Data (this is also a warning class per the SQL standard)"),
    ("03", "SQL Statement Not Yet Complete"),
    ("08", "Connection Exception"),
    ("09", "Triggered Action Exception"),
    ("0A", "Feature Not Supported"),
    ("0B", "Invalid Transaction Initiation"),
    ("0F", "Locator Exception"),
    ("0L", "Invalid Grantor"),
    ("0P", "Invalid Role Specification"),
    ("0Z", "Diagnostics Exception"),
    ("20", "Case Not Found"),
    ("21", "Cardinality Violation"),
    ("22", "Data Exception"),
    ("23", "Integrity Constraint Violation"),
    ("24", "Invalid Cursor State"),
    ("25", "Invalid Transaction State"),
    ("26", "Invalid SQL Statement Name"),
    ("27", "Triggered Data Change Violation"),
    ("28", "Invalid Authorization Specification"),
    ("2B", "Dependent Privilege Descriptors Still Exist"),
    ("2D", "Invalid Transaction Termination"),
    ("2F", "SQL Routine Exception"),
    ("34", "Invalid Cursor Name"),
    ("38", "External Routine Exception"),
    ("39", "External Routine Invocation Exception"),
    ("3B", "Savepoint Exception"),
    ("3D", "Invalid Catalog Name"),
    ("3F", "Invalid Schema Name"),
    ("40", "Transaction Rollback"),
    ("42", "Syntax Error or Access Rule Violation"),
    ("44", "WITH CHECK OPTION Violation"),
    ("53", "Insufficient Resources"),
    ("54", "Program Limit Exceeded"),
    ("55", "Object Not In Prerequisite State"),
    ("57", "Operator Intervention"),
    ("58", "System Error (errors external to PostgreSQL itself)"),
    ("72", "Snapshot Failure"),
    ("F0", "Configuration File Error"),
    ("HV", "Foreign Data Wrapper Error (SQL/MED)"),
    ("P0", "PL/pgSQL Error"),
    ("XX", "Internal Error"),
];

/// Every condition, grouped by class.
pub const SQLSTATE_CODES: &[SqlStateCondition] = &[
    // Class 00: Successful Completion
    SqlStateCondition::new("00000", "successful_completion"),
    // Class 01: Warning
    SqlStateCondition::new("01000", "warning"),
    SqlStateCondition::new("0100C", "dynamic_result_sets_returned"),
    SqlStateCondition::new("01008", "implicit_zero_bit_padding"),
    SqlStateCondition::new("01003", "null_value_eliminated_in_set_function"),
    SqlStateCondition::new("01007", "privilege_not_granted"),
    SqlStateCondition::new("01006", "privilege_not_revoked"),
    SqlStateCondition::new("01004", "string_data_right_truncation"),
    SqlStateCondition::new("01P01", "deprecated_feature"),
    // Class 02: No Data (this is also a warning class per the SQL standard)
    SqlStateCondition::new("02000", "no_data"),
    SqlStateCondition::new("02001", "no_additional_dynamic_result_sets_returned"),
    // Class 03: SQL Statement Not Yet Complete
    SqlStateCondition::new("03000", "sql_statement_not_yet_complete"),
    // Class 08: Connection Exception
    SqlStateCondition::new("08000", "connection_exception"),
    SqlStateCondition::new("08003", "connection_does_not_exist"),
    SqlStateCondition::new("08006", "connection_failure"),
    SqlStateCondition::new("08001", "sqlclient_unable_to_establish_sqlconnection"),
    SqlStateCondition::new("08004", "sqlserver_rejected_establishment_of_sqlconnection"),
    SqlStateCondition::new("08007", "transaction_resolution_unknown"),
    SqlStateCondition::new("08P01", "protocol_violation"),
    // Class 09: Triggered Action Exception
    SqlStateCondition::new("09000", "triggered_action_exception"),
    // Class 0A: Feature Not Supported
    SqlStateCondition::new("0A000", "feature_not_supported"),
    // Class 0B: Invalid Transaction Initiation
    SqlStateCondition::new("0B000", "invalid_transaction_initiation"),
    // Class 0F: Locator Exception
    SqlStateCondition::new("0F000", "locator_exception"),
    SqlStateCondition::new("0F001", "invalid_locator_specification"),
    // Class 0L: Invalid Grantor
    SqlStateCondition::new("0L000", "invalid_grantor"),
    SqlStateCondition::new("0LP01", "invalid_grant_operation"),
    // Class 0P: Invalid Role Specification
    SqlStateCondition::new("0P000", "invalid_role_specification"),
    // Class 0Z: Diagnostics Exception
    SqlStateCondition::new("0Z000", "diagnostics_exception"),
    SqlStateCondition::new("0Z002", "stacked_diagnostics_accessed_without_active_handler"),
    // Class 20: Case Not Found
    SqlStateCondition::new("20000", "case_not_found"),
    // Class 21: Cardinality Violation
    SqlStateCondition::new("21000", "cardinality_violation"),
    // Class 22: Data Exception
    SqlStateCondition::new("22000", "data_exception"),
    SqlStateCondition::new("2202E", "array_subscript_error"),
    SqlStateCondition::new("22021", "character_not_in_repertoire"),
    SqlStateCondition::new("22008", "datetime_field_overflow"),
    SqlStateCondition::new("22012", "division_by_zero"),
    SqlStateCondition::new("22005", "error_in_assignment"),
    SqlStateCondition::new("2200B", "escape_character_conflict"),
    SqlStateCondition::new("22022", "indicator_overflow"),
    SqlStateCondition::new("22015", "interval_field_overflow"),
    SqlStateCondition::new("2201E", "invalid_argument_for_logarithm"),
    SqlStateCondition::new("22014", "invalid_argument_for_ntile_function"),
    SqlStateCondition::new("22016", "invalid_argument_for_nth_value_function"),
    SqlStateCondition::new("2201F", "invalid_argument_for_power_function"),
    SqlStateCondition::new("2201G", "invalid_argument_for_width_bucket_function"),
    SqlStateCondition::new("22018", "invalid_character_value_for_cast"),
    SqlStateCondition::new("22007", "invalid_datetime_format"),
    SqlStateCondition::new("22019", "invalid_escape_character"),
    SqlStateCondition::new("2200D", "invalid_escape_octet"),
    SqlStateCondition::new("22025", "invalid_escape_sequence"),
    SqlStateCondition::new("22P06", "nonstandard_use_of_escape_character"),
    SqlStateCondition::new("22010", "invalid_indicator_parameter_value"),
    SqlStateCondition::new("22023", "invalid_parameter_value"),
    SqlStateCondition::new("22013", "invalid_preceding_or_following_size"),
    SqlStateCondition::new("2201B", "invalid_regular_expression"),
    SqlStateCondition::new("2201W", "invalid_row_count_in_limit_clause"),
    SqlStateCondition::new("2201X", "invalid_row_count_in_result_offset_clause"),
    SqlStateCondition::new("2202H", "invalid_tablesample_argument"),
    SqlStateCondition::new("2202G", "invalid_tablesample_repeat"),
    SqlStateCondition::new("22009", "invalid_time_zone_displacement_value"),
    SqlStateCondition::new("2200C", "invalid_use_of_escape_character"),
    SqlStateCondition::new("2200G", "most_specific_type_mismatch"),
    SqlStateCondition::new("22004", "null_value_not_allowed"),
    SqlStateCondition::new("22002", "null_value_no_indicator_parameter"),
    SqlStateCondition::new("22003", "numeric_value_out_of_range"),
    SqlStateCondition::new("2200H", "sequence_generator_limit_exceeded"),
    SqlStateCondition::new("22026", "string_data_length_mismatch"),
    SqlStateCondition::new("22001", "string_data_right_truncation"),
    SqlStateCondition::new("22011", "substring_error"),
    SqlStateCondition::new("22027", "trim_error"),
    SqlStateCondition::new("22024", "unterminated_c_string"),
    SqlStateCondition::new("2200F", "zero_length_character_string"),
    SqlStateCondition::new("22P01", "floating_point_exception"),
    SqlStateCondition::new("22P02", "invalid_text_representation"),
    SqlStateCondition::new("22P03", "invalid_binary_representation"),
    SqlStateCondition::new("22P04", "bad_copy_file_format"),
    SqlStateCondition::new("22P05", "untranslatable_character"),
    SqlStateCondition::new("2200L", "not_an_xml_document"),
    SqlStateCondition::new("2200M", "invalid_xml_document"),
    SqlStateCondition::new("2200N", "invalid_xml_content"),
    SqlStateCondition::new("2200S", "invalid_xml_comment"),
    SqlStateCondition::new("2200T", "invalid_xml_processing_instruction"),
    SqlStateCondition::new("22030", "duplicate_json_object_key_value"),
    SqlStateCondition::new("22031", "invalid_argument_for_sql_json_datetime_function"),
    SqlStateCondition::new("22032", "invalid_json_text"),
    SqlStateCondition::new("22033", "invalid_sql_json_subscript"),
    SqlStateCondition::new("22034", "more_than_one_sql_json_item"),
    SqlStateCondition::new("22035", "no_sql_json_item"),
    SqlStateCondition::new("22036", "non_numeric_sql_json_item"),
    SqlStateCondition::new("22037", "non_unique_keys_in_a_json_object"),
    SqlStateCondition::new("22038", "singleton_sql_json_item_required"),
    SqlStateCondition::new("22039", "sql_json_array_not_found"),
    SqlStateCondition::new("2203A", "sql_json_member_not_found"),
    SqlStateCondition::new("2203B", "sql_json_number_not_found"),
    SqlStateCondition::new("2203C", "sql_json_object_not_found"),
    SqlStateCondition::new("2203D", "too_many_json_array_elements"),
    SqlStateCondition::new("2203E", "too_many_json_object_members"),
    SqlStateCondition::new("2203F", "sql_json_scalar_required"),
    // Class 23: Integrity Constraint Violation
    SqlStateCondition::new("23000", "integrity_constraint_violation"),
    SqlStateCondition::new("23001", "restrict_violation"),
    SqlStateCondition::new("23502", "not_null_violation"),
    SqlStateCondition::new("23503", "foreign_key_violation"),
    SqlStateCondition::new("23505", "unique_violation"),
    SqlStateCondition::new("23514", "check_violation"),
    SqlStateCondition::new("23P01", "exclusion_violation"),
    // Class 24: Invalid Cursor State
    SqlStateCondition::new("24000", "invalid_cursor_state"),
    // Class 25: Invalid Transaction State
    SqlStateCondition::new("25000", "invalid_transaction_state"),
    SqlStateCondition::new("25001", "active_sql_transaction"),
    SqlStateCondition::new("25002", "branch_transaction_already_active"),
    SqlStateCondition::new("25008", "held_cursor_requires_same_isolation_level"),
    SqlStateCondition::new("25003", "inappropriate_access_mode_for_branch_transaction"),
    SqlStateCondition::new("25004", "inappropriate_isolation_level_for_branch_transaction"),
    SqlStateCondition::new("25005", "no_active_sql_transaction_for_branch_transaction"),
    SqlStateCondition::new("25006", "read_only_sql_transaction"),
    SqlStateCondition::new("25007", "schema_and_data_statement_mixing_not_supported"),
    SqlStateCondition::new("25P01", "no_active_sql_transaction"),
    SqlStateCondition::new("25P02", "in_failed_sql_transaction"),
    SqlStateCondition::new("25P03", "idle_in_transaction_session_timeout"),
    // Class 26: Invalid SQL Statement Name
    SqlStateCondition::new("26000", "invalid_sql_statement_name"),
    // Class 27: Triggered Data Change Violation
    SqlStateCondition::new("27000", "triggered_data_change_violation"),
    // Class 28: Invalid Authorization Specification
    SqlStateCondition::new("28000", "invalid_authorization_specification"),
    SqlStateCondition::new("28P01", "invalid_password"),
    // Class 2B: Dependent Privilege Descriptors Still Exist
    SqlStateCondition::new("2B000", "dependent_privilege_descriptors_still_exist"),
    SqlStateCondition::new("2BP01", "dependent_objects_still_exist"),
    // Class 2D: Invalid Transaction Termination
    SqlStateCondition::new("2D000", "invalid_transaction_termination"),
    // Class 2F: SQL Routine Exception
    SqlStateCondition::new("2F000", "sql_routine_exception"),
    SqlStateCondition::new("2F005", "function_executed_no_return_statement"),
    SqlStateCondition::new("2F002", "modifying_sql_data_not_permitted"),
    SqlStateCondition::new("2F003", "prohibited_sql_statement_attempted"),
    SqlStateCondition::new("2F004", "reading_sql_data_not_permitted"),
    // Class 34: Invalid Cursor Name
    SqlStateCondition::new("34000", "invalid_cursor_name"),
    // Class 38: External Routine Exception
    SqlStateCondition::new("38000", "external_routine_exception"),
    SqlStateCondition::new("38001", "containing_sql_not_permitted"),
    SqlStateCondition::new("38002", "modifying_sql_data_not_permitted"),
    SqlStateCondition::new("38003", "prohibited_sql_statement_attempted"),
    SqlStateCondition::new("38004", "reading_sql_data_not_permitted"),
    // Class 39: External Routine Invocation Exception
    SqlStateCondition::new("39000", "external_routine_invocation_exception"),
    SqlStateCondition::new("39001", "invalid_sqlstate_returned"),
    SqlStateCondition::new("39004", "null_value_not_allowed"),
    SqlStateCondition::new("39P01", "trigger_protocol_violated"),
    SqlStateCondition::new("39P02", "srf_protocol_violated"),
    SqlStateCondition::new("39P03", "event_trigger_protocol_violated"),
    // Class 3B: Savepoint Exception
    SqlStateCondition::new("3B000", "savepoint_exception"),
    SqlStateCondition::new("3B001", "invalid_savepoint_specification"),
    // Class 3D: Invalid Catalog Name
    SqlStateCondition::new("3D000", "invalid_catalog_name"),
    // Class 3F: Invalid Schema Name
    SqlStateCondition::new("3F000", "invalid_schema_name"),
    // Class 40: Transaction Rollback
    SqlStateCondition::new("40000", "transaction_rollback"),
    SqlStateCondition::new("40002", "transaction_integrity_constraint_violation"),
    SqlStateCondition::new("40001", "serialization_failure"),
    SqlStateCondition::new("40003", "statement_completion_unknown"),
    SqlStateCondition::new("40P01", "deadlock_detected"),
    // Class 42: Syntax Error or Access Rule Violation
    SqlStateCondition::new("42000", "syntax_error_or_access_rule_violation"),
    SqlStateCondition::new("42601", "syntax_error"),
    SqlStateCondition::new("42501", "insufficient_privilege"),
    SqlStateCondition::new("42846", "cannot_coerce"),
    SqlStateCondition::new("42803", "grouping_error"),
    SqlStateCondition::new("42P20", "windowing_error"),
    SqlStateCondition::new("42P19", "invalid_recursion"),
    SqlStateCondition::new("42830", "invalid_foreign_key"),
    SqlStateCondition::new("42602", "invalid_name"),
    SqlStateCondition::new("42622", "name_too_long"),
    SqlStateCondition::new("42939", "reserved_name"),
    SqlStateCondition::new("42804", "datatype_mismatch"),
    SqlStateCondition::new("42P18", "indeterminate_datatype"),
    SqlStateCondition::new("42P21", "collation_mismatch"),
    SqlStateCondition::new("42P22", "indeterminate_collation"),
    SqlStateCondition::new("42809", "wrong_object_type"),
    SqlStateCondition::new("428C9", "generated_always"),
    SqlStateCondition::new("42703", "undefined_column"),
    SqlStateCondition::new("42883", "undefined_function"),
    SqlStateCondition::new("42P01", "undefined_table"),
    SqlStateCondition::new("42P02", "undefined_parameter"),
    SqlStateCondition::new("42704", "undefined_object"),
    SqlStateCondition::new("42701", "duplicate_column"),
    SqlStateCondition::new("42P03", "duplicate_cursor"),
    SqlStateCondition::new("42P04", "duplicate_database"),
    SqlStateCondition::new("42723", "duplicate_function"),
    SqlStateCondition::new("42P05", "duplicate_prepared_statement"),
    SqlStateCondition::new("42P06", "duplicate_schema"),
    SqlStateCondition::new("42P07", "duplicate_table"),
    SqlStateCondition::new("42712", "duplicate_alias"),
    SqlStateCondition::new("42710", "duplicate_object"),
    SqlStateCondition::new("42702", "ambiguous_column"),
    SqlStateCondition::new("42725", "ambiguous_function"),
    SqlStateCondition::new("42P08", "ambiguous_parameter"),
    SqlStateCondition::new("42P09", "ambiguous_alias"),
    SqlStateCondition::new("42P10", "invalid_column_reference"),
    SqlStateCondition::new("42611", "invalid_column_definition"),
    SqlStateCondition::new("42P11", "invalid_cursor_definition"),
    SqlStateCondition::new("42P12", "invalid_database_definition"),
    SqlStateCondition::new("42P13", "invalid_function_definition"),
    SqlStateCondition::new("42P14", "invalid_prepared_statement_definition"),
    SqlStateCondition::new("42P15", "invalid_schema_definition"),
    SqlStateCondition::new("42P16", "invalid_table_definition"),
    SqlStateCondition::new("42P17", "invalid_object_definition"),
    // Class 44: WITH CHECK OPTION Violation
    SqlStateCondition::new("44000", "with_check_option_violation"),
    // Class 53: Insufficient Resources
    SqlStateCondition::new("53000", "insufficient_resources"),
    SqlStateCondition::new("53100", "disk_full"),
    SqlStateCondition::new("53200", "out_of_memory"),
    SqlStateCondition::new("53300", "too_many_connections"),
    SqlStateCondition::new("53400", "configuration_limit_exceeded"),
    // Class 54: Program Limit Exceeded
    SqlStateCondition::new("54000", "program_limit_exceeded"),
    SqlStateCondition::new("54001", "statement_too_complex"),
    SqlStateCondition::new("54011", "too_many_columns"),
    SqlStateCondition::new("54023", "too_many_arguments"),
    // Class 55: Object Not In Prerequisite State
    SqlStateCondition::new("55000", "object_not_in_prerequisite_state"),
    SqlStateCondition::new("55006", "object_in_use"),
    SqlStateCondition::new("55P02", "cant_change_runtime_param"),
    SqlStateCondition::new("55P03", "lock_not_available"),
    SqlStateCondition::new("55P04", "unsafe_new_enum_value_usage"),
    // Class 57: Operator Intervention
    SqlStateCondition::new("57000", "operator_intervention"),
    SqlStateCondition::new("57014", "query_canceled"),
    SqlStateCondition::new("57P01", "admin_shutdown"),
    SqlStateCondition::new("57P02", "crash_shutdown"),
    SqlStateCondition::new("57P03", "cannot_connect_now"),
    SqlStateCondition::new("57P04", "database_dropped"),
    // Class 58: System Error (errors external to PostgreSQL itself)
    SqlStateCondition::new("58000", "system_error"),
    SqlStateCondition::new("58030", "io_error"),
    SqlStateCondition::new("58P01", "undefined_file"),
    SqlStateCondition::new("58P02", "duplicate_file"),
    // Class 72: Snapshot Failure
    SqlStateCondition::new("72000", "snapshot_too_old"),
    // Class F0: Configuration File Error
    SqlStateCondition::new("F0000", "config_file_error"),
    SqlStateCondition::new("F0001", "lock_file_exists"),
    // Class HV: Foreign Data Wrapper Error (SQL/MED)
    SqlStateCondition::new("HV000", "fdw_error"),
    SqlStateCondition::new("HV005", "fdw_column_name_not_found"),
    SqlStateCondition::new("HV002", "fdw_dynamic_parameter_value_needed"),
    SqlStateCondition::new("HV010", "fdw_function_sequence_error"),
    SqlStateCondition::new("HV021", "fdw_inconsistent_descriptor_information"),
    SqlStateCondition::new("HV024", "fdw_invalid_attribute_value"),
    SqlStateCondition::new("HV007", "fdw_invalid_column_name"),
    SqlStateCondition::new("HV008", "fdw_invalid_column_number"),
    SqlStateCondition::new("HV004", "fdw_invalid_data_type"),
    SqlStateCondition::new("HV006", "fdw_invalid_data_type_descriptors"),
    SqlStateCondition::new("HV091", "fdw_invalid_descriptor_field_identifier"),
    SqlStateCondition::new("HV00B", "fdw_invalid_handle"),
    SqlStateCondition::new("HV00C", "fdw_invalid_option_index"),
    SqlStateCondition::new("HV00D", "fdw_invalid_option_name"),
    SqlStateCondition::new("HV090", "fdw_invalid_string_length_or_buffer_length"),
    SqlStateCondition::new("HV00A", "fdw_invalid_string_format"),
    SqlStateCondition::new("HV009", "fdw_invalid_use_of_null_pointer"),
    SqlStateCondition::new("HV014", "fdw_too_many_handles"),
    SqlStateCondition::new("HV001", "fdw_out_of_memory"),
    SqlStateCondition::new("HV00P", "fdw_no_schemas"),
    SqlStateCondition::new("HV00J", "fdw_option_name_not_found"),
    SqlStateCondition::new("HV00K", "fdw_reply_handle"),
    SqlStateCondition::new("HV00Q", "fdw_schema_not_found"),
    SqlStateCondition::new("HV00R", "fdw_table_not_found"),
    SqlStateCondition::new("HV00L", "fdw_unable_to_create_execution"),
    SqlStateCondition::new("HV00M", "fdw_unable_to_create_reply"),
    SqlStateCondition::new("HV00N", "fdw_unable_to_establish_connection"),
    // Class P0: PL/pgSQL Error
    SqlStateCondition::new("P0000", "plpgsql_error"),
    SqlStateCondition::new("P0001", "raise_exception"),
    SqlStateCondition::new("P0002", "no_data_found"),
    SqlStateCondition::new("P0003", "too_many_rows"),
    SqlStateCondition::new("P0004", "assert_failure"),
    // Class XX: Internal Error
    SqlStateCondition::new("XX000", "internal_error"),
    SqlStateCondition::new("XX001", "data_corrupted"),
    SqlStateCondition::new("XX002", "index_corrupted"),
];

/// Find the condition for a five-character SQLSTATE code.
pub fn lookup_sqlstate(code: &str) -> Option<&'static SqlStateCondition> {
    let code = code.trim();
    SQLSTATE_CODES.iter().find(|item| item.code.eq_ignore_ascii_case(code))
}

/// Find the title of a two-character SQLSTATE class.
pub fn lookup_class(class_code: &str) -> Option<&'static str> {
    SQLSTATE_CLASSES
        .iter()
        .find(|(class, _)| class.eq_ignore_ascii_case(class_code))
        .map(|(_, title)| *title)
}

/// Find the first code registered under a condition name. A few names
/// (`string_data_right_truncation`, for one) appear in more than one class.
pub fn lookup_condition(condition: &str) -> Option<&'static SqlStateCondition> {
    SQLSTATE_CODES.iter().find(|item| item.condition == condition)
}
