pub mod d400_content_report;
