pub mod colors;
pub mod convert;
pub mod names;
pub mod palettes;

pub use colors::{
    handle_resolve_colors, parse_sample, ColorMatchJson, ColorsRequest, ColorsResponse,
    SampleInput, __path_handle_resolve_colors,
};
pub use convert::{handle_convert, ConvertResponse, __path_handle_convert};
pub use names::{handle_resolve_names, NamesRequest, NamesResponse, __path_handle_resolve_names};
pub use palettes::{
    handle_get_palette, handle_list_palettes, EntryJson, PaletteListResponse, PaletteResponse,
    PaletteSummary, __path_handle_get_palette, __path_handle_list_palettes,
};
