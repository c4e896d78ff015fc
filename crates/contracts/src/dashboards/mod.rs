pub mod d404_sales_insights;
