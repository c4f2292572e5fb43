#![allow(dead_code)]

/// Assembles synthetic saves field by field in file order
#[derive(Debug, Clone)]
pub struct SaveBuilder {
    pub engine_version: u32,
    pub save_number: u32,
    pub name: Vec<u8>,
    pub level: u32,
    pub location: Vec<u8>,
    pub playtime: Vec<u8>,
    pub race: Vec<u8>,
    pub sex: u16,
    pub filetime: u64,
    pub width: u32,
    pub height: u32,
    pub compressed: bool,
    pub format_version: u8,
    pub plugins: Vec<Vec<u8>>,
    pub light_plugins: Vec<Vec<u8>>,
}

impl SaveBuilder {
    pub fn new(engine_version: u32) -> Self {
        SaveBuilder {
            engine_version,
            save_number: 3,
            name: b"Nora".to_vec(),
            level: 12,
            location: b"Sanctuary Hills".to_vec(),
            playtime: b"000.02.41".to_vec(),
            race: b"HumanRace".to_vec(),
            sex: 1,
            filetime: 130_916_324_960_000_000,
            width: 4,
            height: 2,
            compressed: false,
            format_version: 67,
            plugins: vec![b"Fallout4.esm".to_vec()],
            light_plugins: Vec::new(),
        }
    }

    pub fn plugins(mut self, plugins: &[&str]) -> Self {
        self.plugins = plugins.iter().map(|x| x.as_bytes().to_vec()).collect();
        self
    }

    pub fn light_plugins(mut self, plugins: &[&str]) -> Self {
        self.light_plugins = plugins.iter().map(|x| x.as_bytes().to_vec()).collect();
        self
    }

    pub fn compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    fn channels(&self) -> u32 {
        if self.engine_version == 12 {
            4
        } else {
            3
        }
    }

    /// Everything up to and including the screenshot pixels
    pub fn prefix(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"TESV_SAVEGAME");
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&self.engine_version.to_le_bytes());
        out.extend_from_slice(&self.save_number.to_le_bytes());
        push_str(&mut out, &self.name);
        out.extend_from_slice(&self.level.to_le_bytes());
        push_str(&mut out, &self.location);
        push_str(&mut out, &self.playtime);
        push_str(&mut out, &self.race);
        out.extend_from_slice(&self.sex.to_le_bytes());
        out.extend_from_slice(&1250.5f32.to_le_bytes());
        out.extend_from_slice(&2000.0f32.to_le_bytes());
        out.extend_from_slice(&(self.filetime as u32).to_le_bytes());
        out.extend_from_slice(&((self.filetime >> 32) as u32).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        if self.engine_version == 12 {
            let compression_type: u16 = if self.compressed { 2 } else { 0 };
            out.extend_from_slice(&compression_type.to_le_bytes());
        }

        let pixels = (self.width * self.height * self.channels()) as usize;
        out.extend((0..pixels).map(|i| i as u8));
        out
    }

    /// Everything after the screenshot, before any compression
    pub fn body(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.push(self.format_version);
        out.extend_from_slice(&0xdead_beefu32.to_le_bytes());
        out.push(self.plugins.len() as u8);
        for plugin in &self.plugins {
            push_str(&mut out, plugin);
        }

        if self.engine_version == 12 {
            out.extend_from_slice(&(self.light_plugins.len() as u16).to_le_bytes());
            for plugin in &self.light_plugins {
                push_str(&mut out, plugin);
            }
        }
        out
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = self.prefix();
        let body = self.body();
        if self.compressed {
            let block = lz4_flex::block::compress(&body);
            out.extend_from_slice(&(body.len() as u32).to_le_bytes());
            out.extend_from_slice(&(block.len() as u32).to_le_bytes());
            out.extend_from_slice(&block);
        } else {
            out.extend_from_slice(&body);
        }
        out
    }
}

pub fn push_str(out: &mut Vec<u8>, data: &[u8]) {
    out.extend_from_slice(&(data.len() as u16).to_le_bytes());
    out.extend_from_slice(data);
}
