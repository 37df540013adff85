pub mod mock_sector;
