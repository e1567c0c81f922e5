//! ICO 容器构建 - 生成单帧 16x16 32 位纯色图标

/// 文件头长度（字节）
pub const HEADER_LEN: usize = 6;
/// 目录项长度（字节）
pub const ENTRY_LEN: usize = 16;
/// 图标边长（像素）
pub const ICON_SIZE: u8 = 16;
/// 每像素位数
pub const BITS_PER_PIXEL: u16 = 32;
/// 像素区长度: 16 * 16 * 4
pub const PIXEL_DATA_LEN: usize = ICON_SIZE as usize * ICON_SIZE as usize * (BITS_PER_PIXEL as usize / 8);
/// 完整文件长度: 6 + 16 + 1024
pub const ICON_FILE_LEN: usize = HEADER_LEN + ENTRY_LEN + PIXEL_DATA_LEN;

/// ICO 格式的类型标记（1 = 图标，2 = 光标）
const ICON_KIND: u16 = 1;

/// 默认填充色，按 ICO 像素区的 BGRA 顺序排列
pub const FILL_COLOR: Bgra = Bgra {
    b: 0x00,
    g: 0x80,
    r: 0xFF,
    a: 0xFF,
};

/// 单个像素（蓝、绿、红、透明度）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra {
    pub fn to_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }
}

/// 文件头
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconHeader {
    pub reserved: u16,
    pub kind: u16,
    pub count: u16,
}

impl IconHeader {
    /// 只包含一张图像的图标文件头
    pub fn single() -> Self {
        Self {
            reserved: 0,
            kind: ICON_KIND,
            count: 1,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        buf[0..2].copy_from_slice(&self.reserved.to_le_bytes());
        buf[2..4].copy_from_slice(&self.kind.to_le_bytes());
        buf[4..6].copy_from_slice(&self.count.to_le_bytes());
        buf
    }
}

/// 目录项，描述一张内嵌图像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub width: u8,
    pub height: u8,
    pub color_count: u8,
    pub reserved: u8,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub bytes_in_res: u32,
    pub image_offset: u32,
}

impl DirectoryEntry {
    /// 紧跟在文件头和唯一目录项之后的像素区
    fn for_pixels(width: u8, height: u8, bits_per_pixel: u16, data_len: usize) -> Self {
        Self {
            width,
            height,
            color_count: 0,
            reserved: 0,
            planes: 1,
            bits_per_pixel,
            bytes_in_res: data_len as u32,
            image_offset: (HEADER_LEN + ENTRY_LEN) as u32,
        }
    }

    pub fn to_bytes(&self) -> [u8; ENTRY_LEN] {
        let mut buf = [0u8; ENTRY_LEN];
        buf[0] = self.width;
        buf[1] = self.height;
        buf[2] = self.color_count;
        buf[3] = self.reserved;
        buf[4..6].copy_from_slice(&self.planes.to_le_bytes());
        buf[6..8].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        buf[8..12].copy_from_slice(&self.bytes_in_res.to_le_bytes());
        buf[12..16].copy_from_slice(&self.image_offset.to_le_bytes());
        buf
    }
}

/// 组装完成的图标（文件头 + 目录项 + 像素区）
#[derive(Debug, Clone)]
pub struct IconImage {
    pub header: IconHeader,
    pub entry: DirectoryEntry,
    pixels: Vec<u8>,
}

impl IconImage {
    /// 16x16 纯色图像
    pub fn solid(color: Bgra) -> Self {
        let pixel_count = ICON_SIZE as usize * ICON_SIZE as usize;
        let pixels: Vec<u8> = std::iter::repeat(color.to_bytes())
            .take(pixel_count)
            .flatten()
            .collect();

        let entry = DirectoryEntry::for_pixels(ICON_SIZE, ICON_SIZE, BITS_PER_PIXEL, pixels.len());

        Self {
            header: IconHeader::single(),
            entry,
            pixels,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// 按顺序拼接三个区域
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut ico = Vec::with_capacity(HEADER_LEN + ENTRY_LEN + self.pixels.len());
        ico.extend_from_slice(&self.header.to_bytes());
        ico.extend_from_slice(&self.entry.to_bytes());
        ico.extend_from_slice(&self.pixels);
        ico
    }
}

/// 生成默认图标的完整字节序列（1046 字节，每次调用结果相同）
pub fn build_icon() -> Vec<u8> {
    IconImage::solid(FILL_COLOR).to_bytes()
}
