//! Экспорт таблицы продуктов в `.xlsx` и скачивание через Blob
use contracts::domain::a001_promo_product::export::{ExportCell, ExportConfig, ExportTable};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Собирает книгу с одним листом: строка заголовков, затем данные.
///
/// Числовой формат колонки применяется только к числовым ячейкам; текст,
/// который не удалось разобрать как число, пишется как есть.
pub fn build_workbook(table: &ExportTable, config: &ExportConfig) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let column_formats: Vec<Option<Format>> = (0..table.headers.len())
        .map(|col| {
            config
                .format_for(col)
                .map(|f| Format::new().set_num_format(f.pattern()))
        })
        .collect();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&config.sheet_name)?;

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as ColNum, header, &header_format)?;
    }

    for (index, cells) in table.rows.iter().enumerate() {
        let row = (index + 1) as RowNum;
        for (col, cell) in cells.iter().enumerate() {
            let col_num = col as ColNum;
            match cell {
                ExportCell::Empty => {}
                ExportCell::Text(text) => {
                    worksheet.write_string(row, col_num, text)?;
                }
                ExportCell::Number(n) => match column_formats.get(col).and_then(Option::as_ref) {
                    Some(format) => {
                        worksheet.write_number_with_format(row, col_num, *n, format)?;
                    }
                    None => {
                        worksheet.write_number(row, col_num, *n)?;
                    }
                },
            }
        }
    }

    workbook.save_to_buffer()
}

/// Генерирует файл и инициирует скачивание
pub fn export_to_xlsx(table: &ExportTable, config: &ExportConfig) -> Result<(), String> {
    let bytes =
        build_workbook(table, config).map_err(|e| format!("Falha ao gerar planilha: {e}"))?;
    let blob = create_xlsx_blob(&bytes)?;
    download_blob(&blob, &config.file_name)
}

fn create_xlsx_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Временная ссылка `<a download>`: добавить, кликнуть, удалить
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}
