//! Pure builders for the formatting `batchUpdate`. Everything here is
//! constructed from the spec alone; only the renderer touches the network.

use google_sheets4::api::{
    AddConditionalFormatRuleRequest, BooleanCondition, BooleanRule, CellData, CellFormat, Color,
    ConditionValue, ConditionalFormatRule, DataValidationRule, DimensionProperties,
    DimensionRange, GridProperties, GridRange, RepeatCellRequest, Request,
    SetDataValidationRequest, SheetProperties, TextFormat, UpdateDimensionPropertiesRequest,
    UpdateSheetPropertiesRequest,
};
use google_sheets4::client::FieldMask;

use crate::schema::{SheetSpec, Status};

/// Rows covered by the dropdown on the remote sheet, matching the size of a
/// freshly created spreadsheet.
const VALIDATION_ROWS: i32 = 1000;

/// All formatting requests for one freshly created sheet: bold header,
/// pixel column widths, status dropdown, one fill rule per status, frozen
/// header row.
pub fn build_format_requests(spec: &SheetSpec, sheet_id: i32) -> Vec<Request> {
    let mut requests = vec![bold_header_request(spec, sheet_id)];
    requests.extend(column_width_requests(spec, sheet_id));
    requests.push(dropdown_request(spec, sheet_id));
    for status in spec.statuses() {
        requests.push(conditional_fill_request(spec, sheet_id, *status));
    }
    requests.push(freeze_header_request(sheet_id));
    requests
}

fn bold_header_request(spec: &SheetSpec, sheet_id: i32) -> Request {
    Request {
        repeat_cell: Some(RepeatCellRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                start_row_index: Some(0),
                end_row_index: Some(1),
                start_column_index: Some(0),
                end_column_index: Some(spec.column_count() as i32),
            }),
            cell: Some(CellData {
                user_entered_format: Some(CellFormat {
                    text_format: Some(TextFormat {
                        bold: Some(true),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["userEnteredFormat.textFormat.bold"])),
        }),
        ..Default::default()
    }
}

fn column_width_requests(spec: &SheetSpec, sheet_id: i32) -> Vec<Request> {
    spec.columns()
        .iter()
        .enumerate()
        .map(|(index, column)| Request {
            update_dimension_properties: Some(UpdateDimensionPropertiesRequest {
                range: Some(DimensionRange {
                    sheet_id: Some(sheet_id),
                    dimension: Some("COLUMNS".to_string()),
                    start_index: Some(index as i32),
                    end_index: Some(index as i32 + 1),
                }),
                properties: Some(DimensionProperties {
                    pixel_size: Some(column.pixel_width),
                    ..Default::default()
                }),
                fields: Some(FieldMask::new(&["pixelSize"])),
                ..Default::default()
            }),
            ..Default::default()
        })
        .collect()
}

fn dropdown_request(spec: &SheetSpec, sheet_id: i32) -> Request {
    let values = spec
        .status_values()
        .into_iter()
        .map(|value| ConditionValue {
            user_entered_value: Some(value),
            ..Default::default()
        })
        .collect();

    let status_col = spec.status_column_index() as i32;
    Request {
        set_data_validation: Some(SetDataValidationRequest {
            range: Some(GridRange {
                sheet_id: Some(sheet_id),
                start_row_index: Some(1),
                end_row_index: Some(VALIDATION_ROWS),
                start_column_index: Some(status_col),
                end_column_index: Some(status_col + 1),
            }),
            rule: Some(DataValidationRule {
                condition: Some(BooleanCondition {
                    type_: Some("ONE_OF_LIST".to_string()),
                    values: Some(values),
                }),
                strict: Some(true),
                show_custom_ui: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn conditional_fill_request(spec: &SheetSpec, sheet_id: i32, status: Status) -> Request {
    let (red, green, blue) = status.fill().channels_f32();

    Request {
        add_conditional_format_rule: Some(AddConditionalFormatRuleRequest {
            index: Some(0),
            rule: Some(ConditionalFormatRule {
                ranges: Some(vec![GridRange {
                    sheet_id: Some(sheet_id),
                    start_row_index: Some(1),
                    start_column_index: Some(0),
                    end_column_index: Some(spec.column_count() as i32),
                    ..Default::default()
                }]),
                boolean_rule: Some(BooleanRule {
                    condition: Some(BooleanCondition {
                        type_: Some("CUSTOM_FORMULA".to_string()),
                        values: Some(vec![ConditionValue {
                            user_entered_value: Some(spec.status_formula(status)),
                            ..Default::default()
                        }]),
                    }),
                    format: Some(CellFormat {
                        background_color: Some(Color {
                            red: Some(red),
                            green: Some(green),
                            blue: Some(blue),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                }),
                ..Default::default()
            }),
        }),
        ..Default::default()
    }
}

fn freeze_header_request(sheet_id: i32) -> Request {
    Request {
        update_sheet_properties: Some(UpdateSheetPropertiesRequest {
            properties: Some(SheetProperties {
                sheet_id: Some(sheet_id),
                grid_properties: Some(GridProperties {
                    frozen_row_count: Some(1),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            fields: Some(FieldMask::new(&["gridProperties.frozenRowCount"])),
        }),
        ..Default::default()
    }
}
